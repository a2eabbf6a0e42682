//! Run configuration
//!
//! Loaded from an optional JSON file; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_TICKS, SIM_DT};
use crate::error::SimResult;
use crate::sim::{LevelParser, default_symbols, extended_symbols};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seconds of simulated time per tick
    pub time_step: f32,
    /// Give up on a level after this many ticks
    pub max_ticks: u32,
    /// Seed for coin phases
    pub seed: u64,
    /// How much of the finish delay drains per tick once a level has ended
    pub finish_delay_step: f32,
    /// Also map `=` and `|` to horizontal/vertical fireballs
    pub extended_symbols: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step: SIM_DT,
            max_ticks: MAX_TICKS,
            seed: 0,
            finish_delay_step: 1.0,
            extended_symbols: true,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parser with this config's symbol table and seed
    pub fn parser(&self) -> LevelParser {
        let symbols = if self.extended_symbols {
            extended_symbols()
        } else {
            default_symbols()
        };
        LevelParser::new(symbols).with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 42, "max_ticks": 100 }"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_ticks, 100);
        assert_eq!(config.time_step, SIM_DT);
        assert!(config.extended_symbols);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(SimConfig::from_json("{ seed: }").is_err());
    }

    #[test]
    fn test_parser_symbol_table() {
        let config = SimConfig::default();
        assert!(config.parser().actor_from_symbol('=').is_some());

        let config = SimConfig {
            extended_symbols: false,
            ..SimConfig::default()
        };
        let parser = config.parser();
        assert!(parser.actor_from_symbol('=').is_none());
        assert!(parser.actor_from_symbol('@').is_some());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SimConfig::load("/nonexistent/lava-runner.json").is_err());
    }
}
