//! # recsim Encode
//!
//! Feature encoding for the recsim recommendation engine.
//!
//! A [`FeatureSchema`] declares which product attributes participate in
//! similarity and how each is encoded; a [`FeatureEncoder`] turns a catalog
//! snapshot into a fixed-width [`FeatureMatrix`], one row per product:
//!
//! - numeric attributes are min-max normalized to [0, 1] over the snapshot
//! - categorical attributes are one-hot encoded across the snapshot's
//!   distinct values, columns sorted by value
//! - a snapshot with no discriminating feature falls back to an orthonormal
//!   basis, so no false similarity is ever reported
//!
//! ## Example
//!
//! ```rust
//! use recsim_core::{Catalog, Product};
//! use recsim_encode::{FeatureEncoder, FeatureSchema};
//!
//! let catalog = Catalog::load(vec![
//!     Product::new("p1", "Espresso Machine")
//!         .with_category("Kitchen")
//!         .with_price(129.0),
//!     Product::new("p2", "Desk Lamp")
//!         .with_category("Office")
//!         .with_price(25.0),
//! ]).unwrap();
//!
//! let encoder = FeatureEncoder::new(FeatureSchema::default()).unwrap();
//! let matrix = encoder.fit(&catalog);
//! assert_eq!(matrix.len(), 2);
//! ```

pub mod encoder;
pub mod schema;

pub use encoder::{FeatureEncoder, FeatureMatrix};
pub use schema::{Attribute, FeatureField, FeatureKind, FeatureSchema};
