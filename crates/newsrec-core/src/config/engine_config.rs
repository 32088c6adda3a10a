use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Recommendation engine configuration.
///
/// Supplied once at engine construction and immutable afterward. Out-of-range
/// values fail [`EngineConfig::validate`] instead of being clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Content vector dimension (D).
    pub vector_size: usize,
    /// Weight of freshness vs. content similarity, in [0, 1].
    pub freshness_weight: f64,
    /// Exponential decay factor applied per day of view age.
    pub decay_factor: f64,
    /// Freshness window in days; items older than this score 0 freshness.
    pub max_age_days: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vector_size: defaults::DEFAULT_VECTOR_SIZE,
            freshness_weight: defaults::DEFAULT_FRESHNESS_WEIGHT,
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            max_age_days: defaults::DEFAULT_MAX_AGE_DAYS,
        }
    }
}

impl EngineConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vector_size == 0 {
            return Err(ConfigError::InvalidVectorSize(self.vector_size));
        }
        if !(0.0..=1.0).contains(&self.freshness_weight) {
            return Err(ConfigError::InvalidFreshnessWeight(self.freshness_weight));
        }
        if self.decay_factor <= 0.0 || !self.decay_factor.is_finite() {
            return Err(ConfigError::InvalidDecayFactor(self.decay_factor));
        }
        if self.max_age_days <= 0.0 || !self.max_age_days.is_finite() {
            return Err(ConfigError::InvalidMaxAge(self.max_age_days));
        }
        Ok(())
    }

    /// Parse from TOML text, then validate.
    ///
    /// Missing fields take their defaults, so an empty string yields the
    /// default configuration.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
