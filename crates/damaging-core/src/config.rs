//! Damage rule configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLOCK_DAMAGE, DEFAULT_TICK_MS, DEFAULT_TIME_BETWEEN_DAMAGE_MS};
use crate::error::ConfigError;

/// Values copied into a fresh `DamagingStatus`, plus the engine tick length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageConfig {
    pub block_damage: f32,
    pub time_between_damage_ms: u64,
    pub tick_ms: u64,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            block_damage: DEFAULT_BLOCK_DAMAGE,
            time_between_damage_ms: DEFAULT_TIME_BETWEEN_DAMAGE_MS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl DamageConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.block_damage.is_finite() || self.block_damage < 0.0 {
            return Err(ConfigError::Invalid {
                field: "block_damage",
                reason: format!("must be a finite non-negative number, got {}", self.block_damage),
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_ms",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
