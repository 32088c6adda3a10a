mod config_error;
mod vector_error;

pub use config_error::ConfigError;
pub use vector_error::VectorError;

/// Umbrella error for the recommendation engine.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across the workspace.
pub type RecommendResult<T> = Result<T, RecommendError>;
