//! Product catalog module.
//!
//! The catalog is loaded once from a static list of raw records and never
//! mutated afterwards. Share it behind an `Arc`.

mod product;
mod raw;

pub use product::{
    badges_for_tags, Badge, BadgeKind, Product, StockStatus, BEST_SELLER_TAG, GIFT_WRAPPED_TAG,
    OFFER_MARKUP, OFFER_TAG,
};
pub use raw::RawProduct;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Source list compiled into the crate.
const BUILTIN_PRODUCTS: &str = include_str!("../../data/products.json");

/// The immutable product set.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from raw records, assigning ids by load order.
    pub fn from_raw(records: Vec<RawProduct>, currency: Currency) -> Result<Self, CommerceError> {
        let products = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let load_index = u32::try_from(i + 1).map_err(|_| CommerceError::Overflow)?;
                record.into_product(load_index, currency).map(Arc::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        tracing::debug!(products = products.len(), %currency, "catalog loaded");

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// Parse a JSON array of raw records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<RawProduct> = serde_json::from_str(json)?;
        Self::from_raw(records, currency)
    }

    /// The catalog shipped with the crate.
    pub fn builtin(currency: Currency) -> Result<Self, CommerceError> {
        Self::from_json(BUILTIN_PRODUCTS, currency)
    }

    /// All products in load order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn get(&self, id: &ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Check whether `id` belongs to the catalog.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// The currency all prices are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin(Currency::INR).unwrap();
        assert!(!catalog.is_empty());

        for (i, product) in catalog.products().iter().enumerate() {
            assert_eq!(product.load_index as usize, i + 1);
            assert_eq!(product.id, ProductId::from_load_index(product.load_index));
        }
    }

    #[test]
    fn test_builtin_offers_carry_original_price() {
        let catalog = Catalog::builtin(Currency::INR).unwrap();
        for product in catalog.products() {
            assert_eq!(product.is_on_offer(), product.original_price.is_some());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin(Currency::INR).unwrap();
        let first = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(first.load_index, 1);

        assert!(catalog.find(&ProductId::new("0")).is_none());
        assert!(matches!(
            catalog.get(&ProductId::new("9999")),
            Err(CommerceError::ProductNotFound(id)) if id == "9999"
        ));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let json = r#"[
            {"title": "A", "price": 1, "weight_g": 1, "rating": 4, "review_count": 1, "image": "", "category": "Seeds", "stock_status": "in_stock"},
            {"title": "B", "price": 1, "weight_g": 1, "rating": 4, "review_count": 1, "image": "", "category": "Nuts", "stock_status": "in_stock"},
            {"title": "C", "price": 1, "weight_g": 1, "rating": 4, "review_count": 1, "image": "", "category": "Seeds", "stock_status": "in_stock"}
        ]"#;
        let catalog = Catalog::from_json(json, Currency::INR).unwrap();
        assert_eq!(catalog.categories(), vec!["Seeds", "Nuts"]);
    }

    #[test]
    fn test_invalid_record_reports_position() {
        let json = r#"[
            {"title": "A", "price": 1, "weight_g": 1, "rating": 4, "review_count": 1, "image": "", "category": "Seeds", "stock_status": "in_stock"},
            {"price": 1, "weight_g": 1, "rating": 4, "review_count": 1, "image": "", "category": "Nuts", "stock_status": "in_stock"}
        ]"#;
        let err = Catalog::from_json(json, Currency::INR).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProduct { index: 2, .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{", Currency::INR),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
