//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulation ticks per real-time second.
    pub ticks_per_sec: u32,
    /// オートセーブの間隔 (tick数)。0 で無効。
    pub autosave_interval_ticks: u32,
    /// Longest frame delta the clock will honour, in milliseconds.
    pub max_frame_ms: f64,
    /// Storage key for the snapshot. Empty means "use the game's own key".
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ticks_per_sec: 1,
            autosave_interval_ticks: 10,
            max_frame_ms: 5000.0,
            storage_key: String::new(),
        }
    }
}

impl SessionConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resolved_key<'a>(&'a self, game_key: &'a str) -> &'a str {
        if self.storage_key.is_empty() {
            game_key
        } else {
            &self.storage_key
        }
    }
}
