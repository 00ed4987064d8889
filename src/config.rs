use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::SnakeConfig;
use crate::rounds::RoundConfig;

/// Application configuration, optionally read from a TOML file.
///
/// ```toml
/// player_name = "Mia"
/// progress_file = "saves/progress.json"
///
/// [snake]
/// tick_ms = 150
///
/// [rounds]
/// rounds_per_session = 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the name stored in the progress file
    pub player_name: Option<String>,
    pub progress_file: PathBuf,
    pub snake: SnakeConfig,
    pub rounds: RoundConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            progress_file: PathBuf::from("learnplay-progress.json"),
            snake: SnakeConfig::default(),
            rounds: RoundConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.snake.validate().context("Invalid [snake] section")?;
        self.rounds.validate().context("Invalid [rounds] section")?;
        Ok(())
    }
}
