use chrono::{DateTime, Utc};

use newsrec_core::constants::PROFILE_SIGNAL_THRESHOLD;
use newsrec_core::{ContentVector, Entity};

use crate::decay;

/// Aggregates viewing history into a time-decayed interest profile.
///
/// Immutable after construction; aggregation is a pure function of the
/// history slice and the frozen `now` instant.
#[derive(Debug, Clone)]
pub struct ProfileAggregator {
    dims: usize,
    decay_factor: f64,
}

impl ProfileAggregator {
    pub fn new(dims: usize, decay_factor: f64) -> Self {
        Self { dims, decay_factor }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Build the profile vector from viewed entities at a frozen `now`.
    ///
    /// The result is the decay-weighted mean of the viewed vectors,
    /// L2-normalized. Entities without a vector are skipped entirely and
    /// contribute no weight; empty or all-unvectored history yields the
    /// zero vector. Dimension mismatches are rejected upstream at vector
    /// construction; anything that slips through is skipped, not padded.
    pub fn aggregate(&self, history: &[Entity], now: DateTime<Utc>) -> ContentVector {
        let mut weighted_sum = vec![0.0f64; self.dims];
        let mut total_weight = 0.0f64;

        for entity in history {
            let Some(vector) = &entity.vector else {
                continue;
            };
            if vector.dims() != self.dims {
                continue;
            }

            let weight = decay::view_weight(entity.timestamp, now, self.decay_factor);
            for (acc, x) in weighted_sum.iter_mut().zip(vector.as_slice()) {
                *acc += weight * *x as f64;
            }
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return ContentVector::zeros(self.dims);
        }

        for x in weighted_sum.iter_mut() {
            *x /= total_weight;
        }

        let norm: f64 = weighted_sum.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for x in weighted_sum.iter_mut() {
                *x /= norm;
            }
        }

        ContentVector::from(weighted_sum.into_iter().map(|x| x as f32).collect::<Vec<_>>())
    }

    /// Whether a profile carries enough signal to drive similarity ranking.
    pub fn has_signal(profile: &ContentVector) -> bool {
        profile.norm() >= PROFILE_SIGNAL_THRESHOLD
    }
}
