//! # recsim
//!
//! A content-based product recommendation engine.
//!
//! recsim consumes a cleaned, in-memory product catalog, encodes each
//! product into a fixed-width feature vector (min-max normalized numerics
//! plus one-hot categoricals), computes an all-pairs cosine-similarity
//! matrix, and answers "N products most similar to X" queries with
//! deterministic tie-breaking.
//!
//! ## Quick Start
//!
//! ```rust
//! use recsim::prelude::*;
//!
//! let engine = Recommender::new(FeatureSchema::default()).unwrap();
//! engine.load(vec![
//!     Product::new("p1", "Espresso Machine")
//!         .with_category("Kitchen")
//!         .with_price(129.0)
//!         .with_rating(4.5),
//!     Product::new("p2", "Moka Pot")
//!         .with_category("Kitchen")
//!         .with_price(35.0)
//!         .with_rating(4.4),
//!     Product::new("p3", "Desk Lamp")
//!         .with_category("Office")
//!         .with_price(25.0)
//!         .with_rating(4.1),
//! ]).unwrap();
//!
//! let similar = engine.recommend("Espresso Machine", 2).unwrap();
//! assert_eq!(similar[0].product.name, "Moka Pot");
//! ```
//!
//! ## Crate Structure
//!
//! recsim is composed of several crates:
//!
//! - [`recsim-core`](https://docs.rs/recsim-core) - Product records, catalog store, vector math, errors
//! - [`recsim-encode`](https://docs.rs/recsim-encode) - Feature schemas and catalog-snapshot encoding
//! - [`recsim-engine`](https://docs.rs/recsim-engine) - Similarity index lifecycle and top-N queries
//!
//! ## Scope
//!
//! recsim is a library with no network or file surface of its own: an
//! external loader produces the `Vec<Product>` input, and a presentation
//! layer formats the `(product, score)` output. The model is rebuilt from
//! scratch each process lifetime; there is no persistence.

// Re-export core types
pub use recsim_core::{Catalog, Error, Product, ProductId, Result, Vector};

// Re-export encoding
pub use recsim_encode::{Attribute, FeatureEncoder, FeatureField, FeatureKind, FeatureMatrix, FeatureSchema};

// Re-export engine
pub use recsim_engine::{IndexState, Recommendation, Recommender, SimilarityIndex, SimilarityMatrix};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Attribute, Catalog, Error, FeatureEncoder, FeatureField, FeatureKind, FeatureMatrix,
        FeatureSchema, IndexState, Product, ProductId, Recommendation, Recommender, Result,
        SimilarityIndex, SimilarityMatrix, Vector,
    };
}
