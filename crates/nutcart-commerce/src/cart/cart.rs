//! Cart and cart item types.

use std::sync::Arc;

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity (always at least 1).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItem {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl CartItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// `price × quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(i64::from(self.quantity))
    }
}

/// The stored form of a cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartRecord {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A shopping cart.
///
/// Holds at most one item per product, in insertion order. Items never sit
/// at quantity 0: any change that would reach 0 removes the item.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored records against `catalog`.
    ///
    /// Records for products no longer in the catalog, or with quantity 0,
    /// are dropped. Repeated ids are merged.
    pub fn from_records(records: Vec<CartRecord>, catalog: &Catalog) -> Self {
        let mut cart = Self::new();
        for record in records {
            if record.quantity == 0 {
                tracing::debug!(product_id = %record.product_id, "dropping zero-quantity cart record");
                continue;
            }
            let Some(product) = catalog.find(&record.product_id) else {
                tracing::debug!(product_id = %record.product_id, "dropping cart record for unknown product");
                continue;
            };
            match cart.position(&record.product_id) {
                Some(i) => {
                    let item = &mut cart.items[i];
                    item.quantity = item.quantity.saturating_add(record.quantity);
                }
                None => cart.items.push(CartItem {
                    product: Arc::clone(product),
                    quantity: record.quantity,
                }),
            }
        }
        cart
    }

    /// The stored form of this cart.
    pub fn to_records(&self) -> Vec<CartRecord> {
        self.items
            .iter()
            .map(|item| CartRecord {
                product_id: item.product.id.clone(),
                quantity: item.quantity,
            })
            .collect()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing item is incremented in place, otherwise a new item is
    /// appended. Returns the item's new quantity.
    pub fn add(&mut self, product: Arc<Product>, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(i) = self.position(&product.id) {
            let item = &mut self.items[i];
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(item.quantity);
        }

        self.items.push(CartItem { product, quantity });
        Ok(quantity)
    }

    /// Adjust an item's quantity by `delta`.
    ///
    /// The result is floored at 0 and an item reaching 0 is removed, so a
    /// `-1` on an item of quantity 1 removes it. Returns `false` if the
    /// product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) -> bool {
        let Some(i) = self.position(product_id) else {
            return false;
        };

        let next = i64::from(self.items[i].quantity)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        match u32::try_from(next) {
            Ok(0) | Err(_) => {
                self.items.remove(i);
            }
            Ok(quantity) => self.items[i].quantity = quantity,
        }
        true
    }

    /// Remove an item. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Sum of quantities.
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Σ price × quantity`.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(currency), |acc, item| {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            acc.try_add(&line).ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: line.currency.code().to_string(),
            })
        })
    }

    /// Full pricing breakdown. Shipping, taxes and discount are zero.
    pub fn pricing(&self, currency: Currency) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                Ok(LineItemPricing {
                    product_id: item.product.id.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    total: item.line_total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal = self.subtotal(currency)?;
        Ok(CartPricing::new(subtotal, line_items))
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.product.id == product_id)
    }
}
