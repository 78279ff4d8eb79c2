//! Feature schema definitions
//!
//! Declares which product attributes participate in similarity and how each
//! is encoded. The schema is resolved and validated once, at encoder
//! construction, instead of guessing columns per call.

use recsim_core::{Error, Product, Result};
use serde::{Deserialize, Serialize};

/// A product attribute that can feed the encoder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Price,
    Rating,
    Category,
    Country,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Price => "price",
            Attribute::Rating => "rating",
            Attribute::Category => "category",
            Attribute::Country => "country",
        }
    }

    /// Whether the attribute carries a numeric value on [`Product`]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Attribute::Price | Attribute::Rating)
    }

    /// Numeric value with the missing-field default applied
    pub(crate) fn numeric_value(&self, product: &Product) -> f64 {
        match self {
            Attribute::Price => product.price.unwrap_or(0.0),
            Attribute::Rating => product.rating.unwrap_or(0.0),
            Attribute::Category | Attribute::Country => 0.0,
        }
    }

    /// Categorical label with the missing-field default applied
    pub(crate) fn label<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            Attribute::Category => product.category_label(),
            Attribute::Country => product.country_label(),
            Attribute::Price | Attribute::Rating => "",
        }
    }
}

/// How an attribute is encoded into feature columns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Min-max normalized to [0, 1] over the catalog snapshot
    Numeric,
    /// One-hot across the distinct values in the catalog snapshot
    Categorical,
}

/// A single schema entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureField {
    pub attribute: Attribute,
    #[serde(rename = "type")]
    pub kind: FeatureKind,
}

impl FeatureField {
    pub fn numeric(attribute: Attribute) -> Self {
        Self {
            attribute,
            kind: FeatureKind::Numeric,
        }
    }

    pub fn categorical(attribute: Attribute) -> Self {
        Self {
            attribute,
            kind: FeatureKind::Categorical,
        }
    }
}

/// Declared feature configuration for the encoder
///
/// Field order is preserved and determines column order in the encoded
/// matrix, so repeated encodings of the same catalog are reproducible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureSchema {
    fields: Vec<FeatureField>,
}

impl FeatureSchema {
    pub fn new(fields: Vec<FeatureField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    /// Validate the schema against the product record shape
    ///
    /// Fails fast with [`Error::Configuration`] on an empty schema, a kind
    /// that does not fit its attribute, or a duplicated attribute.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::Configuration(
                "feature schema has no fields".to_string(),
            ));
        }

        for (i, field) in self.fields.iter().enumerate() {
            match field.kind {
                FeatureKind::Numeric if !field.attribute.is_numeric() => {
                    return Err(Error::Configuration(format!(
                        "attribute '{}' is not numeric",
                        field.attribute.name()
                    )));
                }
                FeatureKind::Categorical if field.attribute.is_numeric() => {
                    return Err(Error::Configuration(format!(
                        "attribute '{}' is not categorical",
                        field.attribute.name()
                    )));
                }
                _ => {}
            }

            if self.fields[..i]
                .iter()
                .any(|f| f.attribute == field.attribute)
            {
                return Err(Error::Configuration(format!(
                    "attribute '{}' declared more than once",
                    field.attribute.name()
                )));
            }
        }

        Ok(())
    }
}

impl Default for FeatureSchema {
    /// price and rating as numeric features, category one-hot encoded
    fn default() -> Self {
        Self::new(vec![
            FeatureField::numeric(Attribute::Price),
            FeatureField::numeric(Attribute::Rating),
            FeatureField::categorical(Attribute::Category),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = FeatureSchema::default();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.fields().len(), 3);
    }

    #[test]
    fn test_empty_schema_rejected() {
        let schema = FeatureSchema::new(vec![]);
        assert!(matches!(schema.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let schema = FeatureSchema::new(vec![FeatureField::numeric(Attribute::Category)]);
        assert!(matches!(schema.validate(), Err(Error::Configuration(_))));

        let schema = FeatureSchema::new(vec![FeatureField::categorical(Attribute::Price)]);
        assert!(matches!(schema.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let schema = FeatureSchema::new(vec![
            FeatureField::numeric(Attribute::Price),
            FeatureField::numeric(Attribute::Price),
        ]);
        assert!(matches!(schema.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let schema = FeatureSchema::new(vec![
            FeatureField::numeric(Attribute::Rating),
            FeatureField::categorical(Attribute::Country),
        ]);
        let json = serde_json::to_string(&schema).unwrap();
        let parsed: FeatureSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, parsed);
    }
}
