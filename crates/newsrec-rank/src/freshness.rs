use chrono::{DateTime, Utc};

use newsrec_core::constants::SECONDS_PER_DAY;

/// Linear freshness score: `1 - age_days / max_age_days`, clamped to [0, 1].
///
/// Decays to 0 over the configured window; future timestamps score 1.
pub fn freshness_score(timestamp: DateTime<Utc>, now: DateTime<Utc>, max_age_days: f64) -> f64 {
    let age_days = (now - timestamp).num_seconds() as f64 / SECONDS_PER_DAY;
    (1.0 - age_days / max_age_days).clamp(0.0, 1.0)
}
