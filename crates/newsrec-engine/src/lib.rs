//! RecommendationEngine: the single pure orchestration entry point.
//!
//! Composes text vectorization, time-decayed profile aggregation, and
//! blended similarity/freshness ranking. The engine owns no storage: an
//! external collaborator supplies already-materialized candidate and
//! history entities and resolves the returned ids back to full records.

mod engine;

pub use engine::RecommendationEngine;
