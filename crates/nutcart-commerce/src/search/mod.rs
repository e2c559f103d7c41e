//! Catalog query module.
//!
//! Filters, sort options and pagination for the product grid.

mod filter;
mod query;
mod results;

pub use filter::{Filter, FilterConfig, ALL_CATEGORIES, HIGH_RATING_THRESHOLD};
pub use query::{query, SortOption, PAGE_SIZE};
pub use results::{PageLink, Pagination, QueryPage};
