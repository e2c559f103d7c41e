//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown shown on the cart and checkout views.
///
/// The storefront charges no shipping, taxes or discounts, so `total`
/// equals `subtotal`. The fields are kept so the summary renders the
/// usual rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    pub shipping: Money,
    pub taxes: Money,
    pub discount: Money,
    /// Amount payable.
    pub total: Money,
    /// Per-item breakdown in cart order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    pub fn new(subtotal: Money, line_items: Vec<LineItemPricing>) -> Self {
        let zero = Money::zero(subtotal.currency);
        Self {
            subtotal,
            shipping: zero,
            taxes: zero,
            discount: zero,
            total: subtotal,
            line_items,
        }
    }

    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        !self.discount.is_zero()
    }
}

/// Pricing breakdown for a single cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub total: Money,
}
