//! Query results and pagination.

use std::sync::Arc;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Number of slots in the page-link strip.
const MAX_PAGE_LINKS: u32 = 7;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed). May lie past `total_pages`.
    pub page: u32,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages, zero when nothing matched.
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: usize, total: usize) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
        };

        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Get start item number (1-indexed), zero when the page is empty.
    pub fn start_item(&self) -> usize {
        let start = (self.page as usize - 1) * self.per_page + 1;
        if start > self.total {
            0
        } else {
            start
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            (self.page as usize * self.per_page).min(self.total)
        }
    }

    /// Page links for a numbered strip of at most seven slots.
    ///
    /// The first and last page are always shown. Gaps are collapsed into
    /// [`PageLink::Ellipsis`].
    pub fn page_links(&self) -> Vec<PageLink> {
        let total = self.total_pages;
        let current = self.page;

        if total <= MAX_PAGE_LINKS {
            return (1..=total).map(PageLink::Page).collect();
        }

        let mut links = Vec::with_capacity(MAX_PAGE_LINKS as usize);
        if current <= 4 {
            links.extend((1..=5).map(PageLink::Page));
            links.push(PageLink::Ellipsis);
            links.push(PageLink::Page(total));
        } else if current >= total - 3 {
            links.push(PageLink::Page(1));
            links.push(PageLink::Ellipsis);
            links.extend((total - 4..=total).map(PageLink::Page));
        } else {
            links.push(PageLink::Page(1));
            links.push(PageLink::Ellipsis);
            links.extend((current - 1..=current + 1).map(PageLink::Page));
            links.push(PageLink::Ellipsis);
            links.push(PageLink::Page(total));
        }
        links
    }
}

/// One slot of the page-link strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// One page of catalog query output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPage {
    /// Products on this page, in sort order.
    pub items: Vec<Arc<Product>>,
    /// Requested page (1-indexed).
    pub page: u32,
    pub per_page: usize,
    /// Matches across all pages.
    pub total_matches: usize,
    /// `ceil(total_matches / per_page)`.
    pub total_pages: u32,
}

impl QueryPage {
    pub fn new(items: Vec<Arc<Product>>, page: u32, per_page: usize, total_matches: usize) -> Self {
        let pagination = Pagination::new(page, per_page, total_matches);
        Self {
            items,
            page: pagination.page,
            per_page,
            total_matches,
            total_pages: pagination.total_pages,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page, self.total_matches)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(1, 12, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 12, 12).total_pages, 1);
        assert_eq!(Pagination::new(1, 12, 13).total_pages, 2);
        assert_eq!(Pagination::new(1, 12, 20).total_pages, 2);
    }

    #[test]
    fn test_navigation() {
        let p = Pagination::new(1, 12, 20);
        assert!(p.has_next());
        assert!(!p.has_prev());
        assert_eq!((p.start_item(), p.end_item()), (1, 12));

        let p = Pagination::new(2, 12, 20);
        assert!(!p.has_next());
        assert!(p.has_prev());
        assert_eq!((p.start_item(), p.end_item()), (13, 20));
    }

    #[test]
    fn test_page_past_end() {
        let p = Pagination::new(5, 12, 20);
        assert!(!p.has_next());
        assert_eq!((p.start_item(), p.end_item()), (0, 0));
    }

    #[test]
    fn test_page_links_short() {
        assert!(Pagination::new(1, 12, 0).page_links().is_empty());
        assert_eq!(
            Pagination::new(1, 1, 3).page_links(),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn test_page_links_near_start() {
        assert_eq!(
            Pagination::new(2, 1, 20).page_links(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_page_links_near_end() {
        assert_eq!(
            Pagination::new(18, 1, 20).page_links(),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_page_links_middle() {
        assert_eq!(
            Pagination::new(10, 1, 20).page_links(),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }
}
