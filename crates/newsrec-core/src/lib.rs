//! # newsrec-core
//!
//! Foundation crate for the newsrec recommendation engine.
//! Defines the entity model, configuration, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use entity::{ContentVector, Entity, NewsId};
pub use errors::{ConfigError, RecommendError, RecommendResult, VectorError};
