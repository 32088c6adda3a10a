use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use newsrec_core::{ConfigError, ContentVector, EngineConfig, Entity, NewsId};
use newsrec_profile::ProfileAggregator;
use newsrec_rank::Scorer;
use newsrec_vectorize::TextVectorizer;

/// Personalized news recommendation engine.
///
/// Stateless and side-effect-free: `recommend` reads its inputs, returns an
/// ordered id list, and writes nothing back. All fields are immutable after
/// construction, so concurrent calls from multiple threads are independent.
/// Cost is O(pool_size × D) per call.
pub struct RecommendationEngine {
    config: EngineConfig,
    vectorizer: TextVectorizer,
    aggregator: ProfileAggregator,
    scorer: Scorer,
}

impl RecommendationEngine {
    /// Build an engine from a configuration, validating it once.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            vectorizer: TextVectorizer::new(config.vector_size),
            aggregator: ProfileAggregator::new(config.vector_size, config.decay_factor),
            scorer: Scorer::new(config.freshness_weight, config.max_age_days),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend up to `n` item ids, capturing "now" once at entry.
    pub fn recommend(&self, candidates: &[Entity], history: &[Entity], n: usize) -> Vec<NewsId> {
        self.recommend_at(candidates, history, n, Utc::now())
    }

    /// Recommend at a frozen instant.
    ///
    /// Every freshness and decay computation in one call uses the same
    /// `now`, so the result is deterministic for identical inputs. The
    /// output is ordered best-first, contains at most `n` ids, no
    /// duplicates, and no history ids; `n == 0` or an empty pool yield an
    /// empty list.
    pub fn recommend_at(
        &self,
        candidates: &[Entity],
        history: &[Entity],
        n: usize,
        now: DateTime<Utc>,
    ) -> Vec<NewsId> {
        let history_ids: HashSet<NewsId> = history.iter().map(|e| e.id).collect();
        let profile = self.aggregator.aggregate(history, now);

        debug!(
            candidates = candidates.len(),
            history = history.len(),
            profile_norm = profile.norm(),
            cold_start = !ProfileAggregator::has_signal(&profile),
            "ranking candidate pool"
        );

        let ids = self.scorer.rank(candidates, &history_ids, &profile, n, now);

        info!(requested = n, returned = ids.len(), "recommendation complete");
        ids
    }

    /// Vectorize free text at the engine's configured dimension.
    pub fn vectorize(&self, text: &str) -> ContentVector {
        self.vectorizer.vectorize(text)
    }

    /// Build the composite content vector for a news item.
    ///
    /// Ingestion collaborators use this at upsert time so stored vectors
    /// share the dimension the engine scores with.
    pub fn content_vector(&self, title: &str, summary: &str, category: &str) -> ContentVector {
        self.vectorizer.content_vector(title, summary, category)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        // The default configuration is within every documented range.
        Self::from_config(EngineConfig::default())
    }
}
