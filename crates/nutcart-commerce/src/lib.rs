//! Storefront domain types and logic for NutCart.
//!
//! This crate provides the core of a dry-fruits storefront:
//!
//! - **Catalog**: product load from raw records, badges, categories
//! - **Search**: the filter, sort and paginate pipeline behind the product grid
//! - **Cart**: cart items, pricing and the liked set
//! - **Storefront**: cart and wishlist operations persisted to a key-value store
//! - **Session**: filters and the view state machine for a front end
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use nutcart_cache::Cache;
//! use nutcart_commerce::prelude::*;
//!
//! let catalog = Arc::new(Catalog::builtin(Currency::INR).unwrap());
//! let mut store = Storefront::open(Arc::clone(&catalog), Cache::in_memory());
//!
//! // Find cashews and put two packs in the cart
//! let config = FilterConfig::new().with_search("cash");
//! let page = query(catalog.products(), &config);
//! let cashews = &page.items[0];
//! store.add_to_cart(&cashews.id, 2).unwrap();
//!
//! assert_eq!(store.cart_total_count(), 2);
//! println!("Subtotal: {}", store.cart_subtotal().unwrap());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod session;
pub mod storefront;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Badge, BadgeKind, Catalog, Product, RawProduct, StockStatus};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, LikedSet, LineItemPricing};

    // Search
    pub use crate::search::{
        query, Filter, FilterConfig, PageLink, Pagination, QueryPage, SortOption, ALL_CATEGORIES,
        PAGE_SIZE,
    };

    // Store and session
    pub use crate::session::{ShopSession, StaticPage, View};
    pub use crate::storefront::{OrderConfirmation, Storefront};
}
