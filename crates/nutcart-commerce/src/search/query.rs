//! The catalog query engine: filter, sort, paginate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{FilterConfig, QueryPage};
use serde::{Deserialize, Serialize};

/// Products per page.
pub const PAGE_SIZE: usize = 12;

/// Sort options for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Most reviewed first.
    #[default]
    Popularity,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Latest catalog additions first.
    Newest,
}

impl SortOption {
    /// All options in display order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Popularity,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popularity => "popularity",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popularity => "Popularity",
            SortOption::PriceAsc => "Price -- Low to High",
            SortOption::PriceDesc => "Price -- High to Low",
            SortOption::Newest => "Newest First",
        }
    }

    /// Order two products under this option.
    ///
    /// `Newest` orders by load position, not by the id string.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Popularity => b.reviews.cmp(&a.reviews),
            SortOption::PriceAsc => a.price.amount_minor.cmp(&b.price.amount_minor),
            SortOption::PriceDesc => b.price.amount_minor.cmp(&a.price.amount_minor),
            SortOption::Newest => b.load_index.cmp(&a.load_index),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "popularity" | "default" => Ok(SortOption::Popularity),
            "price-asc" | "pricelowtohigh" => Ok(SortOption::PriceAsc),
            "price-desc" | "pricehightolow" => Ok(SortOption::PriceDesc),
            "newest" => Ok(SortOption::Newest),
            _ => Err(CommerceError::UnknownSortOption(s.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run the full pipeline over `products`.
///
/// Filters run in fixed order (search, category, offers, rating, best
/// seller), then one stable sort, then the page slice. `current_page` is not
/// clamped: a page past the end comes back empty with the real
/// `total_pages`.
pub fn query(products: &[Arc<Product>], config: &FilterConfig) -> QueryPage {
    let filters = config.active_filters();

    let mut matches: Vec<Arc<Product>> = products
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .cloned()
        .collect();

    let sort = config.sort_by();
    matches.sort_by(|a, b| sort.compare(a, b));

    let total_matches = matches.len();
    let page = config.current_page();
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    let items: Vec<Arc<Product>> = matches.into_iter().skip(start).take(PAGE_SIZE).collect();

    tracing::trace!(
        total_matches,
        page,
        returned = items.len(),
        sort = %sort,
        "catalog query"
    );

    QueryPage::new(items, page, PAGE_SIZE, total_matches)
}
