use std::collections::HashSet;

use chrono::{DateTime, Utc};

use newsrec_core::constants::PROFILE_SIGNAL_THRESHOLD;
use newsrec_core::{ContentVector, Entity, NewsId};

use crate::freshness;

/// Ranks a candidate pool against a user profile.
///
/// The blended score is
/// `(1 - w) · cosine(profile, candidate) + w · freshness(candidate)`.
/// History ids are always excluded from the output, which never contains
/// duplicates and never exceeds `n` ids.
#[derive(Debug, Clone)]
pub struct Scorer {
    freshness_weight: f64,
    max_age_days: f64,
}

impl Scorer {
    pub fn new(freshness_weight: f64, max_age_days: f64) -> Self {
        Self {
            freshness_weight,
            max_age_days,
        }
    }

    /// Rank candidates against `profile` at a frozen `now`, returning at
    /// most `n` ids.
    ///
    /// A profile whose norm is below the signal threshold carries no usable
    /// interest signal; similarity is skipped entirely and candidates are
    /// ordered by timestamp alone. On the main path, candidates without a
    /// vector are not scored but remain eligible for the freshness fill,
    /// so the result length is still `min(n, |candidates \ history|)`.
    ///
    /// Ties keep candidate-pool order: `sort_by` is stable and the
    /// comparator looks at the score alone.
    pub fn rank(
        &self,
        candidates: &[Entity],
        history_ids: &HashSet<NewsId>,
        profile: &ContentVector,
        n: usize,
        now: DateTime<Utc>,
    ) -> Vec<NewsId> {
        if n == 0 || candidates.is_empty() {
            return Vec::new();
        }

        if profile.norm() < PROFILE_SIGNAL_THRESHOLD {
            return self.rank_by_freshness(candidates, history_ids, n);
        }

        let mut seen = HashSet::new();
        let mut scored: Vec<(NewsId, f64)> = candidates
            .iter()
            .filter(|e| !history_ids.contains(&e.id) && seen.insert(e.id))
            .filter_map(|e| {
                let vector = e.vector.as_ref()?;
                let similarity = profile.dot(vector);
                let fresh = freshness::freshness_score(e.timestamp, now, self.max_age_days);
                let score =
                    (1.0 - self.freshness_weight) * similarity + self.freshness_weight * fresh;
                Some((e.id, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<NewsId> = scored.into_iter().take(n).map(|(id, _)| id).collect();

        if selected.len() < n {
            self.fill_by_freshness(candidates, history_ids, &mut selected, n);
        }

        selected
    }

    /// Freshness-only ordering: timestamp descending, history ids excluded,
    /// duplicates dropped on first occurrence. Used for cold start and to
    /// fill out short main-path results.
    pub fn rank_by_freshness(
        &self,
        candidates: &[Entity],
        history_ids: &HashSet<NewsId>,
        n: usize,
    ) -> Vec<NewsId> {
        if n == 0 {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut fresh: Vec<(NewsId, DateTime<Utc>)> = candidates
            .iter()
            .filter(|e| !history_ids.contains(&e.id) && seen.insert(e.id))
            .map(|e| (e.id, e.timestamp))
            .collect();

        // Stable: equal timestamps keep pool order.
        fresh.sort_by(|a, b| b.1.cmp(&a.1));

        fresh.into_iter().take(n).map(|(id, _)| id).collect()
    }

    fn fill_by_freshness(
        &self,
        candidates: &[Entity],
        history_ids: &HashSet<NewsId>,
        selected: &mut Vec<NewsId>,
        n: usize,
    ) {
        let already: HashSet<NewsId> = selected.iter().copied().collect();
        for id in self.rank_by_freshness(candidates, history_ids, candidates.len()) {
            if selected.len() >= n {
                break;
            }
            if !already.contains(&id) {
                selected.push(id);
            }
        }
    }
}
