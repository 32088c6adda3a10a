//! Candidate ranking for the recommendation engine.
//!
//! Blends content similarity against a user profile with a linear
//! freshness score. A profile without usable signal falls back to
//! freshness-only ordering (cold start); short main-path results are
//! filled from the same ordering.

pub mod freshness;

mod scorer;

pub use scorer::Scorer;
