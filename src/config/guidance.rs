use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::constants::{FT, NM};
use crate::utils::errors::GuidanceError;

/// Configuration for the guidance core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Interval between heavy guidance updates [s]
    pub update_interval: f64,
    /// Descent/climb gradient [m altitude per m ground distance]
    pub steepness: f64,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            update_interval: 1.01,                    // s
            steepness: 3000.0 * FT / (10.0 * NM),     // ~3 deg path
        }
    }
}

impl GuidanceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GuidanceError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&raw)?;
        config.validate()?;
        info!(
            "Loaded guidance config: interval {} s, steepness {}",
            config.update_interval, config.steepness
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GuidanceError> {
        if self.update_interval <= 0.0 {
            return Err(GuidanceError::InvalidConfig(format!(
                "update_interval must be positive, got {}",
                self.update_interval
            )));
        }
        if self.steepness <= 0.0 {
            return Err(GuidanceError::InvalidConfig(format!(
                "steepness must be positive, got {}",
                self.steepness
            )));
        }
        Ok(())
    }
}
