//! Game settings.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change:
//!
//! ```toml
//! level = 2
//!
//! [player]
//! name = "Aria"
//! health = 120
//!
//! [combat]
//! round_delay_ms = 0
//! confirm_start = false
//! seed = 42
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub level: u32,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: Option<String>,
    pub health: i32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CombatConfig {
    /// Pause between combat rounds; 0 disables pacing.
    pub round_delay_ms: u64,
    /// Wait for one more line of input before the boss fight starts.
    pub confirm_start: bool,
    /// Fixed RNG seed for reproducible fights.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            level: 1,
            player: PlayerConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: None,
            health: 100,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            round_delay_ms: 1000,
            confirm_start: true,
            seed: None,
        }
    }
}

impl CombatConfig {
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
