//! Type-safe Key-Value store for NutCart.
//!
//! Provides a simple, ergonomic API for keeping small JSON blobs in a local
//! key-value store, the way a browser storefront keeps its cart in local
//! storage.
//!
//! # Example
//!
//! ```
//! use nutcart_cache::Cache;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Entry {
//!     product_id: String,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::in_memory();
//!
//! // Store a value
//! cache.set("nutcart:cart", &vec![Entry { product_id: "5".into(), quantity: 2 }]).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Vec<Entry>> = cache.get("nutcart:cart").unwrap();
//! assert_eq!(cart.unwrap()[0].quantity, 2);
//!
//! // Delete a value
//! cache.delete("nutcart:cart").unwrap();
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{DirBackend, KvBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, DirBackend, KvBackend, MemoryBackend};
}
