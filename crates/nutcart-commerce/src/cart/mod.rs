//! Shopping cart module.
//!
//! Contains the cart, its pricing breakdown and the liked-products set.

mod cart;
mod pricing;
mod wishlist;

pub use cart::{Cart, CartItem, CartRecord};
pub use pricing::{CartPricing, LineItemPricing};
pub use wishlist::LikedSet;
