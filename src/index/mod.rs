//! Flat vector index with squared-Euclidean distance.
//!
//! A brute-force nearest-neighbor index: vectors are stored in insertion
//! order and every search scans all of them. Positions in the index
//! correspond 1:1 to positions in whatever collection the vectors were
//! derived from; the index never reorders.

use crate::error::{Result, SpoleError};

/// A single nearest-neighbor hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the matched vector in insertion order.
    pub index: usize,
    /// Squared L2 distance to the query (lower is better).
    pub distance: f32,
}

/// Flat (exhaustive) vector index over fixed-width vectors.
pub struct FlatIndex {
    vectors: Vec<Vec<f32>>,
    dimensions: usize,
}

impl FlatIndex {
    /// Build an index over the given vectors.
    ///
    /// All vectors must share the same width, which becomes the index's fixed
    /// dimensionality. Building over zero vectors is rejected: no meaningful
    /// search is possible and downstream code would mask the mistake with
    /// empty results.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimensions = match vectors.first() {
            Some(v) => v.len(),
            None => {
                return Err(SpoleError::Config(
                    "Cannot build an index over zero vectors".to_string(),
                ))
            }
        };

        for vector in &vectors {
            if vector.len() != dimensions {
                return Err(SpoleError::DimensionMismatch {
                    expected: dimensions,
                    actual: vector.len(),
                });
            }
        }

        Ok(Self {
            vectors,
            dimensions,
        })
    }

    /// Number of indexed vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the index holds no vectors. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Fixed vector width of this index.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Find the `top_k` nearest vectors to a single query.
    ///
    /// Results are sorted ascending by distance, ties broken by insertion
    /// order. Returns `min(top_k, len)` hits; a `top_k` of zero is rejected
    /// rather than silently returning nothing.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<Neighbor>> {
        if top_k == 0 {
            return Err(SpoleError::InvalidInput(
                "top_k must be greater than zero".to_string(),
            ));
        }
        if query.len() != self.dimensions {
            return Err(SpoleError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut hits: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| Neighbor {
                index,
                distance: squared_l2(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        hits.truncate(top_k);

        Ok(hits)
    }

    /// Find the `top_k` nearest vectors for each of several queries.
    pub fn search_batch(&self, queries: &[Vec<f32>], top_k: usize) -> Result<Vec<Vec<Neighbor>>> {
        queries
            .iter()
            .map(|query| self.search(query, top_k))
            .collect()
    }
}

/// Squared Euclidean distance between two equal-length vectors.
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
