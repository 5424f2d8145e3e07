#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Tuning for the catalog ranking layer.
///
/// The good-match threshold is an empirically chosen constant; its
/// calibration lives here, outside the matching engine, so deployments can
/// override it without touching scoring.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct RankingConfig {
    #[serde(default = "RankingConfig::default_threshold")]
    pub good_match_threshold: u8,
    #[serde(default = "RankingConfig::default_max_results")]
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            good_match_threshold: Self::default_threshold(),
            max_results: Self::default_max_results(),
        }
    }
}

impl RankingConfig {
    const fn default_threshold() -> u8 {
        20
    }

    const fn default_max_results() -> usize {
        5
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'voxmatch init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Load the config file if present, defaults otherwise.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("voxmatch");
        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("voxmatch");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "ranking": {
    "good_match_threshold": 20,
    "max_results": 5
  }
}
"#;

        std::fs::write(&config_path, config_template)?;
        println!("Created config file at: {}", config_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_calibrated_constants() {
        let config = Config::default();
        assert_eq!(config.ranking.good_match_threshold, 20);
        assert_eq!(config.ranking.max_results, 5);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_file_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"ranking":{"good_match_threshold":35}}"#)
            .expect("valid JSON should deserialize");
        assert_eq!(config.ranking.good_match_threshold, 35);
        assert_eq!(config.ranking.max_results, 5);

        let config: Config = serde_json::from_str("{}").expect("valid JSON should deserialize");
        assert_eq!(config.ranking.good_match_threshold, 20);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn config_round_trips() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("config should serialize");
        let deserialized: Config =
            serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(
            deserialized.ranking.good_match_threshold,
            config.ranking.good_match_threshold
        );
    }
}
