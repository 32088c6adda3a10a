use std::collections::HashSet;

use chrono::Duration;
use newsrec_core::{ContentVector, Entity, NewsId};
use newsrec_rank::Scorer;
use proptest::prelude::*;
use test_fixtures::frozen_now;
use uuid::Uuid;

const DIMS: usize = 4;

#[derive(Debug, Clone)]
struct CandidateCase {
    vector: Option<Vec<f32>>,
    age_days: i64,
    in_history: bool,
}

fn arb_candidate() -> impl Strategy<Value = CandidateCase> {
    (
        prop::option::of(prop::collection::vec(-1.0f32..1.0, DIMS)),
        0i64..120,
        prop::bool::ANY,
    )
        .prop_map(|(vector, age_days, in_history)| CandidateCase {
            vector,
            age_days,
            in_history,
        })
}

fn build_pool(cases: &[CandidateCase]) -> (Vec<Entity>, HashSet<NewsId>) {
    let now = frozen_now();
    let mut history_ids = HashSet::new();
    let pool = cases
        .iter()
        .map(|case| {
            let id = Uuid::new_v4();
            if case.in_history {
                history_ids.insert(id);
            }
            let timestamp = now - Duration::days(case.age_days);
            match &case.vector {
                Some(values) => Entity::new(id, ContentVector::from(values.clone()), timestamp),
                None => Entity::without_vector(id, timestamp),
            }
        })
        .collect();
    (pool, history_ids)
}

fn arb_profile() -> impl Strategy<Value = ContentVector> {
    prop_oneof![
        Just(ContentVector::zeros(DIMS)),
        prop::collection::vec(-1.0f32..1.0, DIMS).prop_map(|values| {
            let norm: f32 = values.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > f32::EPSILON {
                ContentVector::from(values.iter().map(|x| x / norm).collect::<Vec<_>>())
            } else {
                ContentVector::zeros(DIMS)
            }
        }),
    ]
}

proptest! {
    /// Output length is `min(n, |candidates \ history|)`, with set semantics
    /// over candidate ids.
    #[test]
    fn output_length_law(
        cases in prop::collection::vec(arb_candidate(), 0..24),
        profile in arb_profile(),
        n in 0usize..32,
    ) {
        let (pool, history_ids) = build_pool(&cases);
        let scorer = Scorer::new(0.3, 30.0);
        let result = scorer.rank(&pool, &history_ids, &profile, n, frozen_now());

        let eligible: HashSet<NewsId> = pool
            .iter()
            .map(|e| e.id)
            .filter(|id| !history_ids.contains(id))
            .collect();
        prop_assert_eq!(result.len(), n.min(eligible.len()));
    }

    /// History ids never leak into the output.
    #[test]
    fn history_never_leaks(
        cases in prop::collection::vec(arb_candidate(), 0..24),
        profile in arb_profile(),
        n in 0usize..32,
    ) {
        let (pool, history_ids) = build_pool(&cases);
        let scorer = Scorer::new(0.3, 30.0);
        let result = scorer.rank(&pool, &history_ids, &profile, n, frozen_now());

        for id in &result {
            prop_assert!(!history_ids.contains(id));
        }
    }

    /// The output never contains duplicates and only pool ids.
    #[test]
    fn output_is_a_duplicate_free_subset(
        cases in prop::collection::vec(arb_candidate(), 0..24),
        profile in arb_profile(),
        n in 0usize..32,
    ) {
        let (pool, history_ids) = build_pool(&cases);
        let scorer = Scorer::new(0.3, 30.0);
        let result = scorer.rank(&pool, &history_ids, &profile, n, frozen_now());

        let pool_ids: HashSet<NewsId> = pool.iter().map(|e| e.id).collect();
        let mut seen = HashSet::new();
        for id in &result {
            prop_assert!(pool_ids.contains(id));
            prop_assert!(seen.insert(*id), "duplicate id {id} in output");
        }
    }

    /// Ranking is deterministic for identical inputs and a frozen `now`.
    #[test]
    fn ranking_is_deterministic(
        cases in prop::collection::vec(arb_candidate(), 0..16),
        profile in arb_profile(),
        n in 0usize..16,
    ) {
        let (pool, history_ids) = build_pool(&cases);
        let scorer = Scorer::new(0.3, 30.0);
        let now = frozen_now();
        prop_assert_eq!(
            scorer.rank(&pool, &history_ids, &profile, n, now),
            scorer.rank(&pool, &history_ids, &profile, n, now)
        );
    }
}
