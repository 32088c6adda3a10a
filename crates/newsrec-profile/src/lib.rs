//! Time-decayed user-interest profile aggregation.
//!
//! Combines the vectors of a user's viewed items into a single
//! L2-normalized interest vector, weighting each view by exponential decay
//! over its age. A profile whose norm falls below the signal threshold is
//! treated by callers as "no usable signal" (cold start).

pub mod decay;

mod aggregator;

pub use aggregator::ProfileAggregator;
