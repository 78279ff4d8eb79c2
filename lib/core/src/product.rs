use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a product, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    String(String),
    Uuid(Uuid),
    Integer(u64),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::String(s) => write!(f, "{}", s),
            ProductId::Uuid(u) => write!(f, "{}", u),
            ProductId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::String(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::String(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(i: u64) -> Self {
        ProductId::Integer(i)
    }
}

impl From<Uuid> for ProductId {
    fn from(u: Uuid) -> Self {
        ProductId::Uuid(u)
    }
}

/// A product record as supplied by an external loader
///
/// Missing fields default at encoding time rather than failing the load:
/// `category` reads as "Unknown", `price` and `rating` as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique within a catalog; used as the alternate lookup key.
    /// First match wins if names collide.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            price: None,
            rating: None,
            country: None,
            image_url: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Category with the missing-value default applied
    #[inline]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }

    /// Country with the missing-value default applied
    #[inline]
    pub fn country_label(&self) -> &str {
        self.country.as_deref().unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = Product::new("p1", "Espresso Machine")
            .with_category("Kitchen")
            .with_price(129.0)
            .with_rating(4.5)
            .with_country("Italy");

        assert_eq!(p.id.to_string(), "p1");
        assert_eq!(p.category_label(), "Kitchen");
        assert_eq!(p.price, Some(129.0));
        assert_eq!(p.rating, Some(4.5));
        assert_eq!(p.country_label(), "Italy");
        assert!(p.image_url.is_none());
    }

    #[test]
    fn test_missing_field_defaults() {
        let p = Product::new(7u64, "Mystery Box");
        assert_eq!(p.category_label(), "Unknown");
        assert_eq!(p.country_label(), "Unknown");
        assert!(p.price.is_none());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let p: Product = serde_json::from_str(
            r#"{"id": "sku-1", "name": "Desk Lamp", "price": 24.99}"#,
        )
        .unwrap();

        assert_eq!(p.id, ProductId::String("sku-1".to_string()));
        assert_eq!(p.price, Some(24.99));
        assert!(p.category.is_none());
        assert!(p.rating.is_none());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::from(42u64).to_string(), "42");
        assert_eq!(ProductId::from("abc").to_string(), "abc");
    }
}
