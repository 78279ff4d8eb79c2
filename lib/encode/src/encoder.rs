//! Feature encoder
//!
//! Maps a catalog snapshot to a fixed-width numeric matrix, one row per
//! product. Numeric attributes are min-max normalized over the snapshot;
//! categorical attributes are one-hot encoded across the distinct values
//! observed in it, columns sorted by value. The encoding is only valid
//! against the snapshot it was derived from.

use crate::schema::{FeatureKind, FeatureSchema};
use recsim_core::{Catalog, Result, Vector};
use std::collections::BTreeSet;

/// Encoded feature matrix for one catalog snapshot
///
/// Row order equals catalog iteration order. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    rows: Vec<Vector>,
}

impl FeatureMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of feature columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column labels, e.g. `price` or `category=Kitchen`
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&Vector> {
        self.rows.get(i)
    }
}

/// Encodes catalogs according to a validated feature schema
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: FeatureSchema,
}

impl FeatureEncoder {
    /// Create an encoder, validating the schema up front
    pub fn new(schema: FeatureSchema) -> Result<Self> {
        schema.validate()?;
        Ok(Self { schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Encode the current catalog snapshot
    ///
    /// Degenerate columns never fail: a numeric attribute with `max == min`
    /// contributes a constant-0 column, as does a categorical attribute
    /// with a single distinct value (no contrast). If no column carries any
    /// signal the encoder falls back to an orthonormal basis, one unit
    /// vector per product, so self-similarity stays defined and
    /// cross-similarity is 0 rather than a false 1.
    pub fn fit(&self, catalog: &Catalog) -> FeatureMatrix {
        let n = catalog.len();
        let mut labels: Vec<String> = Vec::new();
        let mut columns: Vec<Vec<f32>> = Vec::new();

        for field in self.schema.fields() {
            match field.kind {
                FeatureKind::Numeric => {
                    let (label, column) = self.numeric_column(catalog, field.attribute);
                    labels.push(label);
                    columns.push(column);
                }
                FeatureKind::Categorical => {
                    let (mut cat_labels, mut cat_columns) =
                        self.categorical_columns(catalog, field.attribute);
                    labels.append(&mut cat_labels);
                    columns.append(&mut cat_columns);
                }
            }
        }

        let has_signal = columns
            .iter()
            .any(|column| column.iter().any(|&x| x != 0.0));

        if n == 0 || !has_signal {
            return Self::orthonormal_fallback(n);
        }

        // Transpose columns into per-product rows
        let width = columns.len();
        let rows = (0..n)
            .map(|i| {
                let mut data = Vec::with_capacity(width);
                for column in &columns {
                    data.push(column[i]);
                }
                Vector::new(data)
            })
            .collect();

        FeatureMatrix {
            columns: labels,
            rows,
        }
    }

    /// Min-max normalize one numeric attribute, nulls defaulted to 0
    fn numeric_column(
        &self,
        catalog: &Catalog,
        attribute: crate::schema::Attribute,
    ) -> (String, Vec<f32>) {
        let values: Vec<f64> = catalog
            .products()
            .iter()
            .map(|p| attribute.numeric_value(p))
            .collect();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // Zero-variance column contributes no signal rather than dividing by zero
        let column = if max > min {
            values
                .iter()
                .map(|v| ((v - min) / (max - min)) as f32)
                .collect()
        } else {
            vec![0.0; values.len()]
        };

        (attribute.name().to_string(), column)
    }

    /// One-hot encode one categorical attribute across the snapshot's
    /// distinct values, columns sorted by value
    fn categorical_columns(
        &self,
        catalog: &Catalog,
        attribute: crate::schema::Attribute,
    ) -> (Vec<String>, Vec<Vec<f32>>) {
        let distinct: BTreeSet<&str> = catalog
            .products()
            .iter()
            .map(|p| attribute.label(p))
            .collect();

        let labels: Vec<String> = distinct
            .iter()
            .map(|value| format!("{}={}", attribute.name(), value))
            .collect();

        // A single distinct value carries no contrast between products;
        // emit it as a constant-0 column like a zero-variance numeric.
        if distinct.len() < 2 {
            return (labels, vec![vec![0.0; catalog.len()]; distinct.len()]);
        }

        let columns = distinct
            .iter()
            .map(|value| {
                catalog
                    .products()
                    .iter()
                    .map(|p| if attribute.label(p) == *value { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        (labels, columns)
    }

    /// Identity encoding: one unit vector per product
    fn orthonormal_fallback(n: usize) -> FeatureMatrix {
        FeatureMatrix {
            columns: (0..n).map(|i| format!("identity={}", i)).collect(),
            rows: (0..n).map(|i| Vector::unit(n, i)).collect(),
        }
    }
}
