//! Shop session: the action-handler layer.
//!
//! A [`ShopSession`] bundles the store, the transient filter configuration
//! and the current view. Front ends call into it in response to user actions
//! and render whatever it reports back.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{query, FilterConfig, QueryPage};
use crate::storefront::{OrderConfirmation, Storefront};

/// Informational pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaticPage {
    Faq,
    Terms,
    Privacy,
}

impl StaticPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaticPage::Faq => "faq",
            StaticPage::Terms => "terms",
            StaticPage::Privacy => "privacy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StaticPage::Faq => "Frequently Asked Questions",
            StaticPage::Terms => "Terms & Conditions",
            StaticPage::Privacy => "Privacy Policy",
        }
    }
}

impl FromStr for StaticPage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "faq" => Ok(StaticPage::Faq),
            "terms" => Ok(StaticPage::Terms),
            "privacy" => Ok(StaticPage::Privacy),
            other => Err(format!("unknown page: {other}")),
        }
    }
}

/// What the shop is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "view", content = "target", rename_all = "snake_case")]
pub enum View {
    /// The product grid.
    #[default]
    Home,
    /// Detail page of an existing product.
    Product(ProductId),
    /// A product link that matched nothing.
    NotFound,
    Cart,
    Checkout,
    Wishlist,
    StaticPage(StaticPage),
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("home"),
            View::Product(id) => write!(f, "product/{id}"),
            View::NotFound => f.write_str("not-found"),
            View::Cart => f.write_str("cart"),
            View::Checkout => f.write_str("checkout"),
            View::Wishlist => f.write_str("wishlist"),
            View::StaticPage(page) => f.write_str(page.as_str()),
        }
    }
}

/// Store, filters and view for one shopper.
#[derive(Debug)]
pub struct ShopSession {
    store: Storefront,
    filters: FilterConfig,
    view: View,
}

impl ShopSession {
    /// Start on the home view with default filters.
    pub fn new(store: Storefront) -> Self {
        Self {
            store,
            filters: FilterConfig::default(),
            view: View::Home,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn store(&self) -> &Storefront {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Storefront {
        &mut self.store
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    /// Filter setters reset the page themselves.
    pub fn filters_mut(&mut self) -> &mut FilterConfig {
        &mut self.filters
    }

    /// Reset every filter and return to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear_filters();
    }

    pub fn set_page(&mut self, page: u32) {
        self.filters.set_page(page);
    }

    /// The product grid page for the current filters.
    pub fn visible_products(&self) -> QueryPage {
        query(self.store.catalog().products(), &self.filters)
    }

    pub fn go_home(&mut self) {
        self.navigate(View::Home);
    }

    /// Open a product's detail view.
    ///
    /// An unknown id switches to [`View::NotFound`] and returns `None`.
    pub fn open_product(&mut self, product_id: &ProductId) -> Option<Arc<Product>> {
        match self.store.catalog().find(product_id).cloned() {
            Some(product) => {
                self.navigate(View::Product(product_id.clone()));
                Some(product)
            }
            None => {
                tracing::debug!(%product_id, "product link matched nothing");
                self.navigate(View::NotFound);
                None
            }
        }
    }

    pub fn open_cart(&mut self) {
        self.navigate(View::Cart);
    }

    pub fn open_checkout(&mut self) {
        self.navigate(View::Checkout);
    }

    pub fn open_wishlist(&mut self) {
        self.navigate(View::Wishlist);
    }

    pub fn open_static_page(&mut self, page: StaticPage) {
        self.navigate(View::StaticPage(page));
    }

    /// The product shown by the current view, if any.
    pub fn current_product(&self) -> Option<&Arc<Product>> {
        match &self.view {
            View::Product(id) => self.store.catalog().find(id),
            _ => None,
        }
    }

    /// Place the order and return to the home view.
    pub fn place_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let confirmation = self.store.place_order()?;
        self.navigate(View::Home);
        Ok(confirmation)
    }

    fn navigate(&mut self, view: View) {
        tracing::trace!(from = %self.view, to = %view, "navigate");
        self.view = view;
    }
}
