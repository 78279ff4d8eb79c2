//! # recsim Core
//!
//! Core library for the recsim recommendation engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Vector`] - Dense vector representation with cosine similarity
//! - [`Product`] - A catalog record with heterogeneous attributes
//! - [`Catalog`] - In-memory product table with stable iteration order
//!
//! ## Example
//!
//! ```rust
//! use recsim_core::{Catalog, Product};
//!
//! let catalog = Catalog::load(vec![
//!     Product::new("p1", "Espresso Machine")
//!         .with_category("Kitchen")
//!         .with_price(129.0)
//!         .with_rating(4.5),
//!     Product::new("p2", "French Press")
//!         .with_category("Kitchen")
//!         .with_price(25.0),
//! ]).unwrap();
//!
//! assert_eq!(catalog.resolve("French Press").unwrap(), 1);
//! assert_eq!(catalog.categories(), vec!["Kitchen"]);
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod vector;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use product::{Product, ProductId};
pub use vector::Vector;
