use chrono::{Duration, TimeZone, Utc};
use newsrec_core::{ContentVector, Entity};
use newsrec_profile::{decay, ProfileAggregator};
use proptest::prelude::*;
use uuid::Uuid;

const DIMS: usize = 8;

fn frozen_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn arb_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIMS)
}

proptest! {
    /// Decay weight is monotone in age and bounded by (0, 1].
    #[test]
    fn view_weight_monotone_and_bounded(
        age_a in 0i64..3650,
        age_b in 0i64..3650,
        decay_factor in 0.01f64..5.0,
    ) {
        let now = frozen_now();
        let w_a = decay::view_weight(now - Duration::days(age_a), now, decay_factor);
        let w_b = decay::view_weight(now - Duration::days(age_b), now, decay_factor);

        prop_assert!(w_a > 0.0 && w_a <= 1.0);
        if age_a < age_b {
            prop_assert!(w_a >= w_b, "newer view must not weigh less: {w_a} < {w_b}");
        }
    }

    /// Profile norm is exactly 0 or 1 within tolerance.
    #[test]
    fn profile_norm_is_zero_or_one(
        vectors in prop::collection::vec(arb_vector(), 0..12),
        ages in prop::collection::vec(0i64..365, 0..12),
    ) {
        let now = frozen_now();
        let history: Vec<Entity> = vectors
            .iter()
            .zip(&ages)
            .map(|(values, age)| {
                Entity::new(
                    Uuid::new_v4(),
                    ContentVector::from(values.clone()),
                    now - Duration::days(*age),
                )
            })
            .collect();

        let profile = ProfileAggregator::new(DIMS, 0.95).aggregate(&history, now);
        let norm = profile.norm();
        prop_assert!(
            norm < 1e-6 || (norm - 1.0).abs() < 1e-6,
            "profile norm was {norm}"
        );
    }

    /// Aggregation is deterministic for a frozen `now`.
    #[test]
    fn aggregation_is_deterministic(
        vectors in prop::collection::vec(arb_vector(), 1..8),
        age in 0i64..100,
    ) {
        let now = frozen_now();
        let history: Vec<Entity> = vectors
            .iter()
            .map(|values| {
                Entity::new(
                    Uuid::new_v4(),
                    ContentVector::from(values.clone()),
                    now - Duration::days(age),
                )
            })
            .collect();

        let aggregator = ProfileAggregator::new(DIMS, 0.95);
        prop_assert_eq!(
            aggregator.aggregate(&history, now),
            aggregator.aggregate(&history, now)
        );
    }
}
