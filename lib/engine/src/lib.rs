//! # recsim Engine
//!
//! Query engine for the recsim recommendation engine.
//!
//! This crate ties the catalog store and the feature encoder together:
//!
//! - [`SimilarityIndex`] - all-pairs cosine matrix with an
//!   Empty/Built/Stale lifecycle and atomic snapshot replacement
//! - [`Recommender`] - top-N "products similar to X" queries over the
//!   active catalog
//!
//! ## Example
//!
//! ```rust
//! use recsim_core::Product;
//! use recsim_encode::FeatureSchema;
//! use recsim_engine::Recommender;
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

pub mod index;
pub mod recommend;

pub use index::{IndexState, SimilarityIndex, SimilarityMatrix};
pub use recommend::{Recommendation, Recommender};
