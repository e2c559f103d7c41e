//! Product, badge and stock types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Tag marking a product as on offer.
pub const OFFER_TAG: &str = "offer";
/// Tag marking a best-selling product.
pub const BEST_SELLER_TAG: &str = "best seller";
/// Tag marking a gift-wrapped product.
pub const GIFT_WRAPPED_TAG: &str = "gift wrapped";

/// Multiplier used to derive the struck-through price of offer products.
pub const OFFER_MARKUP: f64 = 1.2;

/// Stock availability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    /// Any other status string from the source data, kept verbatim.
    Other(String),
}

impl StockStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Other(s) => s.as_str(),
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "in_stock" => StockStatus::InStock,
            "out_of_stock" => StockStatus::OutOfStock,
            _ => StockStatus::Other(s.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for StockStatus {
    fn from(s: String) -> Self {
        StockStatus::parse(&s)
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Visual style of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Sale,
    Frozen,
    Discount,
    Organic,
    New,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Sale => "sale",
            BadgeKind::Frozen => "frozen",
            BadgeKind::Discount => "discount",
            BadgeKind::Organic => "organic",
            BadgeKind::New => "new",
        }
    }
}

/// A display label derived from a product's tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: BadgeKind,
}

impl Badge {
    pub fn new(text: impl Into<String>, kind: BadgeKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Derive badges from tags, one per matching tag, in fixed order:
/// offer, best seller, gift wrapped.
pub fn badges_for_tags(tags: &[String]) -> Vec<Badge> {
    const RULES: [(&str, &str, BadgeKind); 3] = [
        (OFFER_TAG, "Offer", BadgeKind::Discount),
        (BEST_SELLER_TAG, "Best Seller", BadgeKind::Sale),
        (GIFT_WRAPPED_TAG, "Gift", BadgeKind::New),
    ];

    RULES
        .iter()
        .filter(|(tag, _, _)| tags.iter().any(|t| t.as_str() == *tag))
        .map(|(_, text, kind)| Badge::new(*text, *kind))
        .collect()
}

/// A product in the catalog.
///
/// Products are built once by the catalog loader and shared read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// 1-based position in the source list.
    pub load_index: u32,
    /// Product title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// Pack weight for display (e.g., "250g").
    pub weight: String,
    /// Image URL.
    pub image: String,
    /// Long or short description.
    pub description: Option<String>,
    /// Selling price.
    pub price: Money,
    /// Struck-through price, only for offer products.
    pub original_price: Option<Money>,
    /// Average rating in [0, 5].
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Free-text labels.
    pub tags: Vec<String>,
    /// Badges derived from `tags`.
    pub badges: Vec<Badge>,
    /// Stock availability.
    pub stock_status: StockStatus,
}

impl Product {
    /// Check whether the product carries `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_on_offer(&self) -> bool {
        self.has_tag(OFFER_TAG)
    }

    pub fn is_best_seller(&self) -> bool {
        self.has_tag(BEST_SELLER_TAG)
    }

    /// Percentage saved against the original price, if on offer.
    pub fn discount_percentage(&self) -> Option<f64> {
        let original = self.original_price?;
        if original.amount_minor > self.price.amount_minor {
            let savings = original.amount_minor - self.price.amount_minor;
            Some((savings as f64 / original.amount_minor as f64) * 100.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_badges_follow_fixed_order() {
        let badges = badges_for_tags(&tags(&["gift wrapped", "best seller", "offer"]));
        let texts: Vec<_> = badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Offer", "Best Seller", "Gift"]);
        assert_eq!(badges[0].kind, BadgeKind::Discount);
        assert_eq!(badges[1].kind, BadgeKind::Sale);
        assert_eq!(badges[2].kind, BadgeKind::New);
    }

    #[test]
    fn test_badge_serializes_kind_as_type() {
        let json = serde_json::to_value(Badge::new("Offer", BadgeKind::Discount)).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Offer", "type": "discount" }));
    }

    #[test]
    fn test_badges_ignore_unknown_tags() {
        assert!(badges_for_tags(&tags(&["organic", "Offer"])).is_empty());
    }

    #[test]
    fn test_stock_status_parse() {
        assert_eq!(StockStatus::parse("in_stock"), StockStatus::InStock);
        assert_eq!(StockStatus::parse("OUT_OF_STOCK"), StockStatus::OutOfStock);
        assert_eq!(
            StockStatus::parse("preorder"),
            StockStatus::Other("preorder".into())
        );
    }

    #[test]
    fn test_stock_status_serde_as_string() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, r#""out_of_stock""#);
        let back: StockStatus = serde_json::from_str(r#""in_stock""#).unwrap();
        assert_eq!(back, StockStatus::InStock);
    }

    #[test]
    fn test_discount_percentage() {
        let product = Product {
            id: ProductId::from_load_index(1),
            load_index: 1,
            title: "Almonds".into(),
            category: "Nuts".into(),
            weight: "250g".into(),
            image: String::new(),
            description: None,
            price: Money::from_decimal(500.0, Currency::INR),
            original_price: Some(Money::from_decimal(600.0, Currency::INR)),
            rating: 4.5,
            reviews: 10,
            tags: tags(&["offer"]),
            badges: vec![],
            stock_status: StockStatus::InStock,
        };
        let pct = product.discount_percentage().unwrap();
        assert!((pct - 16.67).abs() < 0.01);
        assert!(product.is_on_offer());
        assert!(!product.is_best_seller());
    }
}
