use chrono::{DateTime, Utc};

use newsrec_core::constants::SECONDS_PER_DAY;

/// Exponential view weight: `e^(-decay_factor · age_days)`.
///
/// Range: (0.0, 1.0]. Age is measured in fractional days; future-dated
/// views clamp to age 0 and weight 1.0.
pub fn view_weight(viewed_at: DateTime<Utc>, now: DateTime<Utc>, decay_factor: f64) -> f64 {
    let age_days = (now - viewed_at).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    (-decay_factor * age_days).exp()
}
