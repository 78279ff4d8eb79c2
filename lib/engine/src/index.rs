//! All-pairs similarity index
//!
//! Owns the pairwise cosine-similarity matrix and its lifecycle. Rebuilds
//! are full recomputes: a new matrix is built completely and then swapped
//! in, so concurrent readers see either the previous consistent matrix or
//! the new one, never a partial write.

use parking_lot::RwLock;
use recsim_encode::FeatureMatrix;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Square, symmetric matrix of cosine similarities, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Matrix over zero products
    pub fn empty() -> Self {
        Self {
            n: 0,
            values: Vec::new(),
        }
    }

    /// Compute all pairwise similarities for an encoded snapshot
    ///
    /// O(n^2 * d); each unordered pair is computed once and mirrored.
    /// The diagonal is fixed at 1.0 (self-similarity).
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let n = features.len();
        let rows = features.rows();
        let mut values = vec![0.0f32; n * n];

        for i in 0..n {
            values[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = rows[i].cosine_similarity(&rows[j]);
                values[i * n + j] = score;
                values[j * n + i] = score;
            }
        }

        Self { n, values }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of products at positions (i, j)
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.values[i * self.n + j])
        } else {
            None
        }
    }

    /// Full similarity row for the product at position `i`
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.values[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}

/// Lifecycle state of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No matrix has been built yet
    Empty,
    /// Matrix is consistent with the catalog it was built from
    Built,
    /// A mutation happened; the matrix must be rebuilt before use
    Stale,
}

struct IndexInner {
    matrix: Arc<SimilarityMatrix>,
    state: IndexState,
}

/// Shared handle on the similarity matrix
///
/// State machine: Empty -> Built on first rebuild, Built -> Stale on
/// invalidation, Stale -> Built on the next rebuild.
pub struct SimilarityIndex {
    inner: RwLock<IndexInner>,
}

impl SimilarityIndex {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(IndexInner {
                matrix: Arc::new(SimilarityMatrix::empty()),
                state: IndexState::Empty,
            }),
        }
    }

    pub fn state(&self) -> IndexState {
        self.inner.read().state
    }

    /// Number of products covered by the current matrix
    pub fn len(&self) -> usize {
        self.inner.read().matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().matrix.is_empty()
    }

    /// Cheap consistent snapshot of the current matrix
    pub fn snapshot(&self) -> Arc<SimilarityMatrix> {
        self.inner.read().matrix.clone()
    }

    /// Mark the matrix stale after a catalog mutation
    pub fn invalidate(&self) {
        let mut inner = self.inner.write();
        if inner.state == IndexState::Built {
            inner.state = IndexState::Stale;
        }
    }

    /// Recompute the matrix from an encoded snapshot and publish it
    pub fn rebuild(&self, features: &FeatureMatrix) {
        let started = Instant::now();
        let matrix = SimilarityMatrix::from_features(features);

        debug!(
            products = matrix.len(),
            width = features.width(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "similarity matrix rebuilt"
        );

        let mut inner = self.inner.write();
        inner.matrix = Arc::new(matrix);
        inner.state = IndexState::Built;
    }
}

impl Default for SimilarityIndex {
    fn default() -> Self {
        Self::new()
    }
}
