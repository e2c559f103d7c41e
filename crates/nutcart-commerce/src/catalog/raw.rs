//! Raw source records and their mapping into [`Product`].

use crate::catalog::product::{badges_for_tags, StockStatus, OFFER_MARKUP};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product record as it appears in the static source list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Older records carry `name` instead of `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub price: f64,
    pub weight_g: u32,
    pub rating: f32,
    pub review_count: u32,
    pub image: String,
    pub category: String,
    pub stock_status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

impl RawProduct {
    /// Map this record into a product at 1-based position `load_index`.
    pub fn into_product(self, load_index: u32, currency: Currency) -> Result<Product, CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            index: load_index as usize,
            reason: reason.to_string(),
        };

        let title = non_empty(self.title)
            .or_else(|| non_empty(self.name))
            .ok_or_else(|| invalid("missing title and name"))?;

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid("rating must be within 0..=5"));
        }

        let price = Money::from_decimal(self.price, currency);
        let badges = badges_for_tags(&self.tags);
        // Struck-through price is round(price * 1.2) in whole units, taken
        // from the source price rather than the rounded minor units.
        let original_price = self
            .tags
            .iter()
            .any(|t| t == crate::catalog::OFFER_TAG)
            .then(|| Money::from_decimal((self.price * OFFER_MARKUP).round(), currency));

        Ok(Product {
            id: ProductId::from_load_index(load_index),
            load_index,
            title,
            category: self.category,
            weight: format!("{}g", self.weight_g),
            image: self.image,
            description: non_empty(self.long_description).or_else(|| non_empty(self.short_description)),
            price,
            original_price,
            rating: self.rating,
            reviews: self.review_count,
            tags: self.tags,
            badges,
            stock_status: StockStatus::parse(&self.stock_status),
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
