use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vector::ContentVector;

/// Opaque news item identifier. The engine never inspects it.
pub type NewsId = Uuid;

/// Minimal unit consumed by the scoring engine: an id, an optional content
/// vector, and an instant (publication time for candidates, view time for
/// history records).
///
/// A `None` vector means no content signal was materialized for the item.
/// Such entities are filtered out of similarity math entirely — never
/// treated as zero vectors. Entities are plain values; the engine reads
/// them and writes nothing back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: NewsId,
    pub vector: Option<ContentVector>,
    pub timestamp: DateTime<Utc>,
}

impl Entity {
    pub fn new(id: NewsId, vector: ContentVector, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            vector: Some(vector),
            timestamp,
        }
    }

    pub fn without_vector(id: NewsId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            vector: None,
            timestamp,
        }
    }
}
