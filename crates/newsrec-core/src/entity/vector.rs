use serde::{Deserialize, Serialize};

use crate::errors::VectorError;

/// Fixed-dimension content vector, L2-normalized or zero.
///
/// Construction from external data goes through [`ContentVector::new`],
/// which enforces the configured dimension. A length mismatch is a contract
/// violation and is rejected outright, never truncated or padded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVector(Vec<f32>);

impl ContentVector {
    /// Create from raw values, enforcing the expected dimension.
    pub fn new(values: Vec<f32>, expected_dims: usize) -> Result<Self, VectorError> {
        if values.len() != expected_dims {
            return Err(VectorError::DimensionMismatch {
                expected: expected_dims,
                actual: values.len(),
            });
        }
        Ok(Self(values))
    }

    /// Zero vector of the given dimension ("no content signal").
    pub fn zeros(dims: usize) -> Self {
        Self(vec![0.0; dims])
    }

    pub fn dims(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// L2 norm, accumulated in f64.
    pub fn norm(&self) -> f64 {
        self.0
            .iter()
            .map(|x| (*x as f64) * (*x as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// True when the vector carries no signal.
    pub fn is_zero(&self) -> bool {
        self.norm() < f64::EPSILON
    }

    /// Dot product. Both sides are unit-norm or zero by construction, so
    /// this is cosine similarity. Mismatched lengths yield 0.0.
    pub fn dot(&self, other: &Self) -> f64 {
        if self.0.len() != other.0.len() {
            return 0.0;
        }
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (*a as f64) * (*b as f64))
            .sum()
    }
}

/// Trusted construction for vectors the workspace itself produces; the
/// vector's dimension is its length. External floats go through
/// [`ContentVector::new`] instead.
impl From<Vec<f32>> for ContentVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}
