//! The cart and wishlist store.
//!
//! [`Storefront`] owns the cart and the liked set, loads them from a
//! [`Cache`] on open and writes both back after every mutation. Storage is
//! best-effort: unreadable data loads as empty and failed writes are logged,
//! never returned.

use std::sync::Arc;

use nutcart_cache::{cache_key, Cache};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartPricing, CartRecord, LikedSet};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Namespace shared by all stored keys.
pub const STORAGE_NAMESPACE: &str = "nutcart";

/// Key holding the cart, a JSON list of `{product_id, quantity}`.
pub fn cart_key() -> String {
    cache_key!(STORAGE_NAMESPACE, "cart")
}

/// Key holding the liked set, a JSON list of product ids.
pub fn liked_key() -> String {
    cache_key!(STORAGE_NAMESPACE, "liked")
}

/// Summary of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Units in the cart when the order was placed.
    pub item_count: u64,
    pub subtotal: Money,
    /// Unix timestamp (seconds).
    pub placed_at: i64,
}

/// Cart and liked set over an immutable catalog.
#[derive(Debug)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cache: Cache,
    cart: Cart,
    liked: LikedSet,
}

impl Storefront {
    /// Open the store, restoring the cart and liked set from `cache`.
    ///
    /// Missing or malformed data yields an empty cart or liked set.
    pub fn open(catalog: Arc<Catalog>, cache: Cache) -> Self {
        let cart = match cache.get::<Vec<CartRecord>>(&cart_key()) {
            Ok(Some(records)) => Cart::from_records(records, &catalog),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored cart unreadable, starting empty");
                Cart::new()
            }
        };

        let liked = match cache.get::<LikedSet>(&liked_key()) {
            Ok(Some(liked)) => liked,
            Ok(None) => LikedSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored wishlist unreadable, starting empty");
                LikedSet::new()
            }
        };

        tracing::debug!(
            cart_items = cart.len(),
            liked = liked.len(),
            "storefront state loaded"
        );

        Self {
            catalog,
            cache,
            cart,
            liked,
        }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Returns the product's new quantity in the cart.
    pub fn add_to_cart(&mut self, product_id: &ProductId, quantity: u32) -> Result<u32, CommerceError> {
        let product = Arc::clone(self.catalog.get(product_id)?);
        let quantity = self.cart.add(product, quantity)?;
        self.persist();
        Ok(quantity)
    }

    /// Adjust a cart item's quantity by `delta`, removing it at 0.
    ///
    /// Unknown ids are ignored. Returns whether the product was in the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) -> bool {
        let found = self.cart.update_quantity(product_id, delta);
        self.persist();
        found
    }

    /// Drop a product from the cart. Returns whether it was there.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        self.persist();
        removed
    }

    /// Like or unlike a product. Returns whether it is liked afterwards.
    ///
    /// Liking requires the product to exist; an already-liked id can always
    /// be unliked.
    pub fn toggle_like(&mut self, product_id: &ProductId) -> Result<bool, CommerceError> {
        if !self.liked.contains(product_id) && !self.catalog.contains(product_id) {
            return Err(CommerceError::ProductNotFound(product_id.to_string()));
        }
        let liked = self.liked.toggle(product_id);
        self.persist();
        Ok(liked)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Place the order: summarize and clear the cart.
    ///
    /// No payment, stock or order record is involved.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let confirmation = OrderConfirmation {
            item_count: self.cart.total_count(),
            subtotal: self.cart_subtotal()?,
            placed_at: current_timestamp(),
        };
        self.clear_cart();

        tracing::info!(
            items = confirmation.item_count,
            subtotal = %confirmation.subtotal,
            "order placed"
        );
        Ok(confirmation)
    }

    /// Sum of quantities in the cart.
    pub fn cart_total_count(&self) -> u64 {
        self.cart.total_count()
    }

    /// Number of liked products.
    pub fn wishlist_count(&self) -> usize {
        self.liked.len()
    }

    pub fn cart_subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal(self.catalog.currency())
    }

    pub fn cart_pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.pricing(self.catalog.currency())
    }

    pub fn quantity_in_cart(&self, product_id: &ProductId) -> u32 {
        self.cart.quantity_of(product_id)
    }

    pub fn is_liked(&self, product_id: &ProductId) -> bool {
        self.liked.contains(product_id)
    }

    /// Liked products in like order, skipping ids missing from the catalog.
    pub fn liked_products(&self) -> Vec<Arc<Product>> {
        self.liked
            .iter()
            .filter_map(|id| self.catalog.find(id).cloned())
            .collect()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&cart_key(), &self.cart.to_records()) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
        if let Err(e) = self.cache.set(&liked_key(), &self.liked) {
            tracing::warn!(error = %e, "failed to persist wishlist");
        }
        tracing::trace!(
            cart_items = self.cart.len(),
            liked = self.liked.len(),
            "storefront state persisted"
        );
    }
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
