//! Filter configuration and the individual filter stages.

use crate::catalog::Product;
use crate::search::SortOption;
use serde::{Deserialize, Deserializer, Serialize};

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "All Category";

/// Minimum rating kept by the high-rated filter.
pub const HIGH_RATING_THRESHOLD: f32 = 4.0;

/// One stage of the filter pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Case-insensitive substring match on title or category.
    Search(String),
    /// Exact category match.
    Category(String),
    /// Products tagged `offer`.
    OffersOnly,
    /// Products rated at least [`HIGH_RATING_THRESHOLD`].
    HighRated,
    /// Products tagged `best seller`.
    BestSeller,
}

impl Filter {
    /// Check whether `product` passes this stage.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Search(query) => {
                let q = query.to_lowercase();
                product.title.to_lowercase().contains(&q)
                    || product.category.to_lowercase().contains(&q)
            }
            Filter::Category(category) => product.category == *category,
            Filter::OffersOnly => product.is_on_offer(),
            Filter::HighRated => product.rating >= HIGH_RATING_THRESHOLD,
            Filter::BestSeller => product.is_best_seller(),
        }
    }
}

/// Transient query parameters driving the catalog view.
///
/// Fields are private so that every change to a criterion or the sort goes
/// through a setter, and every setter that changes something resets the
/// current page to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    search_query: String,
    category: String,
    offers_only: bool,
    high_rated_only: bool,
    best_selling_only: bool,
    sort_by: SortOption,
    #[serde(deserialize_with = "page_at_least_one")]
    current_page: u32,
}

fn page_at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            offers_only: false,
            high_rated_only: false,
            best_selling_only: false,
            sort_by: SortOption::default(),
            current_page: 1,
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.set_search_query(query);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_offers_only(mut self, on: bool) -> Self {
        self.set_offers_only(on);
        self
    }

    pub fn with_high_rated_only(mut self, on: bool) -> Self {
        self.set_high_rated_only(on);
        self
    }

    pub fn with_best_selling_only(mut self, on: bool) -> Self {
        self.set_best_selling_only(on);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.set_sort_by(sort);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.set_page(page);
        self
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn offers_only(&self) -> bool {
        self.offers_only
    }

    pub fn high_rated_only(&self) -> bool {
        self.high_rated_only
    }

    pub fn best_selling_only(&self) -> bool {
        self.best_selling_only
    }

    pub fn sort_by(&self) -> SortOption {
        self.sort_by
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.reset_page();
        }
    }

    /// Select a category; [`ALL_CATEGORIES`] clears the selection.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.category {
            self.category = category;
            self.reset_page();
        }
    }

    pub fn set_offers_only(&mut self, on: bool) {
        if on != self.offers_only {
            self.offers_only = on;
            self.reset_page();
        }
    }

    pub fn toggle_offers_only(&mut self) {
        self.set_offers_only(!self.offers_only);
    }

    pub fn set_high_rated_only(&mut self, on: bool) {
        if on != self.high_rated_only {
            self.high_rated_only = on;
            self.reset_page();
        }
    }

    pub fn toggle_high_rated_only(&mut self) {
        self.set_high_rated_only(!self.high_rated_only);
    }

    pub fn set_best_selling_only(&mut self, on: bool) {
        if on != self.best_selling_only {
            self.best_selling_only = on;
            self.reset_page();
        }
    }

    pub fn toggle_best_selling_only(&mut self) {
        self.set_best_selling_only(!self.best_selling_only);
    }

    pub fn set_sort_by(&mut self, sort: SortOption) {
        if sort != self.sort_by {
            self.sort_by = sort;
            self.reset_page();
        }
    }

    /// Move to `page` (1-based). Zero is treated as 1. Not clamped against
    /// the number of pages.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Reset every filter field to its default and go back to page 1.
    ///
    /// The sort order is kept.
    pub fn clear_filters(&mut self) {
        *self = Self {
            sort_by: self.sort_by,
            ..Self::default()
        };
    }

    /// Check whether any criterion narrows the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }

    /// The enabled stages, in pipeline order.
    pub fn active_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if !self.search_query.is_empty() {
            filters.push(Filter::Search(self.search_query.clone()));
        }
        if self.category != ALL_CATEGORIES {
            filters.push(Filter::Category(self.category.clone()));
        }
        if self.offers_only {
            filters.push(Filter::OffersOnly);
        }
        if self.high_rated_only {
            filters.push(Filter::HighRated);
        }
        if self.best_selling_only {
            filters.push(Filter::BestSeller);
        }
        filters
    }

    fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.search_query(), "");
        assert_eq!(config.category(), ALL_CATEGORIES);
        assert_eq!(config.sort_by(), SortOption::Popularity);
        assert_eq!(config.current_page(), 1);
        assert!(!config.has_active_filters());
    }

    #[test]
    fn test_toggle_resets_page() {
        let mut config = FilterConfig::default();
        config.set_page(3);
        assert_eq!(config.current_page(), 3);

        config.toggle_offers_only();
        assert!(config.offers_only());
        assert_eq!(config.current_page(), 1);
    }

    #[test]
    fn test_every_criterion_resets_page() {
        let changes: [fn(&mut FilterConfig); 6] = [
            |c| c.set_search_query("cashew"),
            |c| c.set_category("Nuts"),
            |c| c.toggle_offers_only(),
            |c| c.toggle_high_rated_only(),
            |c| c.toggle_best_selling_only(),
            |c| c.set_sort_by(SortOption::PriceAsc),
        ];

        for change in changes {
            let mut config = FilterConfig::default().with_page(4);
            change(&mut config);
            assert_eq!(config.current_page(), 1);
        }
    }

    #[test]
    fn test_unchanged_value_keeps_page() {
        let mut config = FilterConfig::default().with_page(2);
        config.set_category(ALL_CATEGORIES);
        config.set_offers_only(false);
        config.set_sort_by(SortOption::Popularity);
        assert_eq!(config.current_page(), 2);
    }

    #[test]
    fn test_page_zero_becomes_one() {
        let config = FilterConfig::default().with_page(0);
        assert_eq!(config.current_page(), 1);
    }

    #[test]
    fn test_deserialized_page_zero_becomes_one() {
        let mut json = serde_json::to_value(FilterConfig::default()).unwrap();
        json["current_page"] = 0.into();
        let config: FilterConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.current_page(), 1);
    }

    #[test]
    fn test_clear_filters() {
        let mut config = FilterConfig::default()
            .with_search("date")
            .with_category("Dates")
            .with_offers_only(true)
            .with_high_rated_only(true)
            .with_best_selling_only(true)
            .with_sort(SortOption::Newest)
            .with_page(2);

        config.clear_filters();
        assert!(!config.has_active_filters());
        assert_eq!(config.current_page(), 1);
        assert_eq!(config.sort_by(), SortOption::Newest);
    }

    #[test]
    fn test_active_filters_in_pipeline_order() {
        let config = FilterConfig::default()
            .with_best_selling_only(true)
            .with_search("nut")
            .with_offers_only(true);

        assert_eq!(
            config.active_filters(),
            vec![
                Filter::Search("nut".into()),
                Filter::OffersOnly,
                Filter::BestSeller
            ]
        );
    }
}
