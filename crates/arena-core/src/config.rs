use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// Tunables for how player tokens are sized and animated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Token travel speed in pixels per second.
    pub player_speed: f64,
    /// Token diameter as a fraction of the smaller cell side.
    pub radius_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            radius_ratio: 0.8,
        }
    }
}

impl RenderConfig {
    pub fn with_speed(mut self, player_speed: f64) -> Self {
        self.player_speed = player_speed;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        if !self.radius_ratio.is_finite() || self.radius_ratio <= 0.0 || self.radius_ratio > 1.0 {
            return Err(ArenaError::InvalidConfig(format!(
                "radius_ratio must be in (0, 1], got {}",
                self.radius_ratio
            )));
        }
        Ok(())
    }
}
