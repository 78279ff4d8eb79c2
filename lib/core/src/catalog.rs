use crate::{Error, Product, ProductId, Result};
use ahash::AHashMap;
use std::collections::BTreeSet;

/// In-memory product table with stable iteration order
///
/// Owns the canonical set of products for a session. Positions are stable
/// after a successful `load`, so the similarity matrix row/column order and
/// tie-breaking both follow catalog order. Lookups by id and by name are
/// index-backed; for duplicate names the first record wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: AHashMap<String, usize>,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a batch of records
    ///
    /// Fails with [`Error::EmptyCatalog`] on an empty batch; the load is
    /// atomic, so callers never observe a partially built catalog.
    pub fn load(records: Vec<Product>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut by_id = AHashMap::with_capacity(records.len());
        let mut by_name = AHashMap::with_capacity(records.len());
        for (pos, product) in records.iter().enumerate() {
            by_id.entry(product.id.to_string()).or_insert(pos);
            by_name.entry(product.name.clone()).or_insert(pos);
        }

        Ok(Self {
            products: records,
            by_id,
            by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product at a catalog position
    pub fn get(&self, pos: usize) -> Option<&Product> {
        self.products.get(pos)
    }

    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.position_of_id(&id.to_string())
            .and_then(|pos| self.products.get(pos))
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Product> {
        self.by_name
            .get(name)
            .and_then(|&pos| self.products.get(pos))
    }

    /// Resolve a query key to a catalog position, name first, then id
    pub fn resolve(&self, key: &str) -> Result<usize> {
        self.by_name
            .get(key)
            .copied()
            .or_else(|| self.position_of_id(key))
            .ok_or_else(|| Error::ProductNotFound(key.to_string()))
    }

    fn position_of_id(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// All product names in catalog order
    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    /// Distinct categories, sorted lexicographically
    pub fn categories(&self) -> Vec<String> {
        self.distinct(|p| p.category.as_deref())
    }

    /// Distinct countries, sorted lexicographically
    pub fn countries(&self) -> Vec<String> {
        self.distinct(|p| p.country.as_deref())
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Product) -> Option<&'a str>) -> Vec<String> {
        let values: BTreeSet<&str> = self.products.iter().filter_map(field).collect();
        values.into_iter().map(String::from).collect()
    }

    /// Update a product's rating in place
    ///
    /// Ratings outside [1, 5] are rejected at the boundary. The caller is
    /// responsible for invalidating any similarity index derived from this
    /// catalog, since numeric bounds may have changed.
    pub fn set_rating(&mut self, pos: usize, rating: f64) -> Result<()> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(Error::InvalidRating { value: rating });
        }
        let product = self
            .products
            .get_mut(pos)
            .ok_or_else(|| Error::ProductNotFound(pos.to_string()))?;
        product.rating = Some(rating);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("p1", "Espresso Machine")
                .with_category("Kitchen")
                .with_price(129.0)
                .with_rating(4.5)
                .with_country("Italy"),
            Product::new("p2", "French Press")
                .with_category("Kitchen")
                .with_price(25.0)
                .with_rating(4.0)
                .with_country("France"),
            Product::new("p3", "Desk Lamp")
                .with_category("Office")
                .with_price(24.99)
                .with_country("Italy"),
        ]
    }

    #[test]
    fn test_empty_load_fails() {
        assert!(matches!(Catalog::load(vec![]), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let catalog = Catalog::load(sample()).unwrap();
        assert_eq!(catalog.len(), 3);

        let by_name = catalog.get_by_name("French Press").unwrap();
        assert_eq!(by_name.id.to_string(), "p2");

        let by_id = catalog.get_by_id(&ProductId::from("p3")).unwrap();
        assert_eq!(by_id.name, "Desk Lamp");

        assert!(catalog.get_by_name("Toaster").is_none());
    }

    #[test]
    fn test_resolve_prefers_name() {
        // A product whose id collides with another product's name
        let records = vec![
            Product::new("Widget", "Gadget"),
            Product::new("g2", "Widget"),
        ];
        let catalog = Catalog::load(records).unwrap();

        // "Widget" is both an id (pos 0) and a name (pos 1); name wins
        assert_eq!(catalog.resolve("Widget").unwrap(), 1);
        assert_eq!(catalog.resolve("g2").unwrap(), 1);
        assert!(matches!(
            catalog.resolve("nope"),
            Err(Error::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_name_first_match_wins() {
        let records = vec![
            Product::new("a", "Same Name").with_price(1.0),
            Product::new("b", "Same Name").with_price(2.0),
        ];
        let catalog = Catalog::load(records).unwrap();
        assert_eq!(catalog.get_by_name("Same Name").unwrap().id.to_string(), "a");
    }

    #[test]
    fn test_distinct_values_sorted() {
        let catalog = Catalog::load(sample()).unwrap();
        assert_eq!(catalog.categories(), vec!["Kitchen", "Office"]);
        assert_eq!(catalog.countries(), vec!["France", "Italy"]);
    }

    #[test]
    fn test_product_names_in_catalog_order() {
        let catalog = Catalog::load(sample()).unwrap();
        assert_eq!(
            catalog.product_names(),
            vec!["Espresso Machine", "French Press", "Desk Lamp"]
        );
    }

    #[test]
    fn test_set_rating_bounds() {
        let mut catalog = Catalog::load(sample()).unwrap();
        assert!(matches!(
            catalog.set_rating(0, 0.5),
            Err(Error::InvalidRating { .. })
        ));
        assert!(matches!(
            catalog.set_rating(0, 5.1),
            Err(Error::InvalidRating { .. })
        ));

        catalog.set_rating(2, 3.0).unwrap();
        assert_eq!(catalog.get(2).unwrap().rating, Some(3.0));
    }
}
