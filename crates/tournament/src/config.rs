//! TOML configuration for the tournament binary.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tiered_engine::{ConfigError, EngineConfig};

use crate::match_runner::MatchConfig;

/// A `[match]` table for the runner and an `[engine]` table for the tiered engine.
///
/// ```toml
/// [match]
/// num_games = 20
/// seed = 7
///
/// [engine]
/// search_threshold = 12
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    pub engine: EngineConfig,
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_config.num_games == 0 {
            return Err(ConfigError::Validation("match.num_games must be > 0".into()));
        }
        if self.match_config.move_time_ms == Some(0) {
            return Err(ConfigError::Validation(
                "match.move_time_ms must be > 0".into(),
            ));
        }
        self.engine.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        let config = TournamentConfig::from_toml(
            r#"
            [match]
            num_games = 4
            seed = 7
            verbose = false

            [engine]
            search_threshold = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.match_config.num_games, 4);
        assert_eq!(config.match_config.seed, Some(7));
        assert!(config.match_config.alternate_first_player);
        assert!(!config.match_config.verbose);
        assert_eq!(config.engine.search_threshold, 12);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = TournamentConfig::from_toml("").unwrap();
        assert_eq!(config.match_config.num_games, 10);
        assert_eq!(config.engine.search_threshold, 13);
    }

    #[test]
    fn test_zero_games_rejected() {
        let err = TournamentConfig::from_toml("[match]\nnum_games = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
