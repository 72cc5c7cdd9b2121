//! Tournament Runner for Quarto engines
//!
//! This crate provides infrastructure for:
//! - Playing matches between engines on a single match state
//! - Forfeiting games when an engine proposes a move the rules refuse
//! - Saving results as JSON for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Tiered engine against the random baseline
//! cargo run -p tournament -- match tiered random --games 20 --seed 7
//!
//! # With a TOML config and saved results
//! cargo run -p tournament -- match tiered heuristic --config tournament.toml --out results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
