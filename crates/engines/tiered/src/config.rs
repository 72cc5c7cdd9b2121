//! Engine configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use heuristic_engine::HeuristicConfig;
use quarto_core::{SearchLimits, PIECE_COUNT};
use search_engine::SearchConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Upper bound for the heuristic weights.
const MAX_WEIGHT: i32 = 100;

/// Everything the tiered engine can be tuned with.
///
/// ```toml
/// search_threshold = 13
/// seed = 42
/// move_time_ms = 2000
///
/// [search]
/// late_depth = 4
///
/// [heuristic]
/// pressure_overlap = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search once this many pieces or fewer are left; heuristics above it.
    pub search_threshold: usize,
    /// Seed for the heuristic's random tie-breaks (None = entropy)
    pub seed: Option<u64>,
    /// Time budget per move in milliseconds (None = depth only)
    pub move_time_ms: Option<u64>,
    /// Node budget per move (None = unbounded)
    pub max_nodes: Option<u64>,
    pub search: SearchConfig,
    pub heuristic: HeuristicConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_threshold: 13,
            seed: None,
            move_time_ms: None,
            max_nodes: None,
            search: SearchConfig::default(),
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_threshold > PIECE_COUNT {
            return Err(ConfigError::Validation(format!(
                "search_threshold must be <= {PIECE_COUNT}"
            )));
        }
        if self.move_time_ms == Some(0) {
            return Err(ConfigError::Validation("move_time_ms must be > 0".into()));
        }
        if self.max_nodes == Some(0) {
            return Err(ConfigError::Validation("max_nodes must be > 0".into()));
        }

        let search = &self.search;
        if search.exact_max_remaining >= search.late_tier_min {
            return Err(ConfigError::Validation(
                "search.exact_max_remaining must be < search.late_tier_min".into(),
            ));
        }
        if search.late_tier_min > search.late_tier_max {
            return Err(ConfigError::Validation(
                "search.late_tier_min must be <= search.late_tier_max".into(),
            ));
        }
        if search.late_tier_max > search.mid_tier_max {
            return Err(ConfigError::Validation(
                "search.late_tier_max must be <= search.mid_tier_max".into(),
            ));
        }
        if search.mid_depth == 0 || search.late_depth == 0 {
            return Err(ConfigError::Validation("search depths must be > 0".into()));
        }
        if !(4..=28).contains(&search.tt_bits) {
            return Err(ConfigError::Validation("search.tt_bits must be in [4, 28]".into()));
        }

        let heuristic = &self.heuristic;
        if heuristic.pressure_overlap > 4 {
            return Err(ConfigError::Validation(
                "heuristic.pressure_overlap must be in [0, 4]".into(),
            ));
        }
        if !(0..=MAX_WEIGHT).contains(&heuristic.threat_weight) {
            return Err(ConfigError::Validation(format!(
                "heuristic.threat_weight must be in [0, {MAX_WEIGHT}]"
            )));
        }
        if !(0..=MAX_WEIGHT).contains(&heuristic.extension_penalty) {
            return Err(ConfigError::Validation(format!(
                "heuristic.extension_penalty must be in [0, {MAX_WEIGHT}]"
            )));
        }
        Ok(())
    }

    /// Per-move limits from the configured budgets. Depth is left to the tiers.
    pub fn search_limits(&self) -> SearchLimits {
        let limits = match self.move_time_ms {
            Some(ms) => SearchLimits::time(Duration::from_millis(ms)),
            None => SearchLimits::depth(u8::MAX),
        };
        match self.max_nodes {
            Some(n) => limits.with_max_nodes(n),
            None => limits,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
