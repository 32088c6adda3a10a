/// Configuration validation errors.
///
/// Invalid configuration hard-fails at engine construction; it is never
/// clamped into range.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("vector_size must be positive, got {0}")]
    InvalidVectorSize(usize),

    #[error("freshness_weight must be within [0, 1], got {0}")]
    InvalidFreshnessWeight(f64),

    #[error("decay_factor must be positive and finite, got {0}")]
    InvalidDecayFactor(f64),

    #[error("max_age_days must be positive and finite, got {0}")]
    InvalidMaxAge(f64),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
