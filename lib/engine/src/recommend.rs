//! Query engine
//!
//! [`Recommender`] is the facade over the catalog store, the feature
//! encoder, and the similarity index. Mutations (`load`, `set_rating`)
//! re-encode the catalog and eagerly rebuild the matrix; queries are pure
//! reads over the published snapshot.

use crate::index::{IndexState, SimilarityIndex};
use parking_lot::RwLock;
use recsim_core::{Catalog, Error, Product, Result};
use recsim_encode::{FeatureEncoder, FeatureSchema};
use serde::Serialize;
use tracing::info;

/// One query result: a product and its similarity to the queried product
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub score: f32,
}

/// Content-based recommendation engine
///
/// Holds the session catalog as an owned value rather than ambient global
/// state, so independent instances never cross-contaminate. All methods
/// take `&self`; interior state is guarded so concurrent readers see either
/// the previous consistent catalog/matrix pair or the new one.
pub struct Recommender {
    encoder: FeatureEncoder,
    catalog: RwLock<Option<Catalog>>,
    index: SimilarityIndex,
}

impl Recommender {
    /// Create an engine with the given feature schema
    ///
    /// The schema is validated here; an invalid configuration fails fast
    /// with [`Error::Configuration`] instead of silently skipping features.
    pub fn new(schema: FeatureSchema) -> Result<Self> {
        Ok(Self {
            encoder: FeatureEncoder::new(schema)?,
            catalog: RwLock::new(None),
            index: SimilarityIndex::new(),
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.encoder.schema()
    }

    /// State of the underlying similarity index
    pub fn index_state(&self) -> IndexState {
        self.index.state()
    }

    /// Number of products in the active catalog
    pub fn len(&self) -> usize {
        self.catalog.read().as_ref().map_or(0, Catalog::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the active catalog and rebuild the similarity model
    ///
    /// Fails atomically with [`Error::EmptyCatalog`] on an empty batch; the
    /// previous catalog and matrix stay in place in that case.
    pub fn load(&self, records: Vec<Product>) -> Result<()> {
        let catalog = Catalog::load(records)?;

        let mut guard = self.catalog.write();
        let features = self.encoder.fit(&catalog);
        self.index.invalidate();
        self.index.rebuild(&features);
        info!(products = catalog.len(), "catalog loaded");
        *guard = Some(catalog);
        Ok(())
    }

    /// The `n` products most similar to the one identified by `key`
    ///
    /// `key` resolves by name first, then by id; an unknown key fails with
    /// [`Error::ProductNotFound`]. The queried product is never included.
    /// Ties are broken by catalog order (stable sort), and `n == 0` yields
    /// an empty result rather than an error.
    pub fn recommend(&self, key: &str, n: usize) -> Result<Vec<Recommendation>> {
        // Safety net for hosts that invalidated explicitly; mutations
        // rebuild eagerly so this is normally a no-op.
        if self.index.state() == IndexState::Stale {
            self.refresh();
        }

        let guard = self.catalog.read();
        let catalog = guard
            .as_ref()
            .ok_or_else(|| Error::ProductNotFound(key.to_string()))?;
        let pos = catalog.resolve(key)?;

        if n == 0 {
            return Ok(Vec::new());
        }

        let matrix = self.index.snapshot();
        let row = match matrix.row(pos) {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };

        let mut scored: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != pos)
            .collect();
        // Stable sort: equal scores keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(n);

        // Matrix rows and catalog positions stay in lockstep under the
        // write-lock discipline in load/set_rating.
        Ok(scored
            .into_iter()
            .filter_map(|(j, score)| {
                catalog.get(j).map(|product| Recommendation {
                    product: product.clone(),
                    score,
                })
            })
            .collect())
    }

    /// Update a product's rating and rebuild the similarity model
    ///
    /// Ratings outside [1, 5] are rejected with [`Error::InvalidRating`].
    /// A successful update re-encodes the whole catalog: numeric bounds may
    /// have shifted, so the cached matrix cannot be patched in place.
    pub fn set_rating(&self, key: &str, rating: f64) -> Result<()> {
        let mut guard = self.catalog.write();
        let catalog = guard
            .as_mut()
            .ok_or_else(|| Error::ProductNotFound(key.to_string()))?;
        let pos = catalog.resolve(key)?;
        catalog.set_rating(pos, rating)?;

        let features = self.encoder.fit(catalog);
        self.index.invalidate();
        self.index.rebuild(&features);
        Ok(())
    }

    /// Mark the similarity model stale; the next query rebuilds it
    pub fn invalidate(&self) {
        self.index.invalidate();
    }

    /// Look up a product by name or id
    pub fn get(&self, key: &str) -> Option<Product> {
        let guard = self.catalog.read();
        let catalog = guard.as_ref()?;
        let pos = catalog.resolve(key).ok()?;
        catalog.get(pos).cloned()
    }

    /// All product names in catalog order
    pub fn product_names(&self) -> Vec<String> {
        self.catalog.read().as_ref().map_or_else(Vec::new, |c| {
            c.product_names().into_iter().map(String::from).collect()
        })
    }

    /// Distinct categories in the active catalog, sorted
    pub fn categories(&self) -> Vec<String> {
        self.catalog
            .read()
            .as_ref()
            .map_or_else(Vec::new, Catalog::categories)
    }

    /// Distinct countries in the active catalog, sorted
    pub fn countries(&self) -> Vec<String> {
        self.catalog
            .read()
            .as_ref()
            .map_or_else(Vec::new, Catalog::countries)
    }

    fn refresh(&self) {
        let guard = self.catalog.read();
        if let Some(catalog) = guard.as_ref() {
            let features = self.encoder.fit(catalog);
            self.index.rebuild(&features);
        }
    }
}
