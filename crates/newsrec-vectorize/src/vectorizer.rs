use newsrec_core::constants::{CATEGORY_WEIGHT, TITLE_SUMMARY_WEIGHT};
use newsrec_core::ContentVector;

use crate::{hashing, tokenizer};

/// Feature-hashing text vectorizer.
///
/// Hashes tokens into fixed-dimension buckets and L2-normalizes the result.
/// Immutable after construction; vectorization is a pure function of the
/// input text.
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    dims: usize,
}

impl TextVectorizer {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Vectorize raw text.
    ///
    /// Each surviving token increments its hash bucket by 1; the result is
    /// L2-normalized. Text with no surviving tokens yields the zero vector —
    /// the division is guarded, never NaN.
    pub fn vectorize(&self, text: &str) -> ContentVector {
        let mut vec = vec![0.0f32; self.dims];
        for token in tokenizer::tokenize(text) {
            vec[hashing::bucket(&token, self.dims)] += 1.0;
        }
        l2_normalize(&mut vec);
        ContentVector::from(vec)
    }

    /// Composite content vector for a news item:
    /// `0.7 · vectorize(title + " " + summary) + 0.3 · vectorize(category)`,
    /// re-normalized. A zero result is valid and signals "no content signal".
    pub fn content_vector(&self, title: &str, summary: &str, category: &str) -> ContentVector {
        let text_vec = self.vectorize(&format!("{title} {summary}"));
        let category_vec = self.vectorize(category);

        let mut combined: Vec<f32> = text_vec
            .as_slice()
            .iter()
            .zip(category_vec.as_slice())
            .map(|(t, c)| TITLE_SUMMARY_WEIGHT * t + CATEGORY_WEIGHT * c)
            .collect();
        l2_normalize(&mut combined);
        ContentVector::from(combined)
    }

    /// Build composite vectors for a batch of `(title, summary, category)`
    /// triples, in order.
    pub fn content_vector_batch(&self, items: &[(String, String, String)]) -> Vec<ContentVector> {
        items
            .iter()
            .map(|(title, summary, category)| self.content_vector(title, summary, category))
            .collect()
    }
}

fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
