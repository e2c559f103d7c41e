//! Catalog browsing.

use anyhow::Result;
use nutcart_commerce::search::{query, FilterConfig, QueryPage, SortOption};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::page_strip;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let config = filter_config(&args)?;
    let page = query(catalog.products(), &config);

    tracing::debug!(
        filters = config.active_filters().len(),
        sort = %config.sort_by(),
        page = config.current_page(),
        matches = page.total_matches,
        "browse"
    );

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    render_page(&page, &config, ctx);
    Ok(())
}

/// Build the filter configuration from command-line flags.
///
/// The page is applied last since every other setter resets it.
fn filter_config(args: &BrowseArgs) -> Result<FilterConfig> {
    let sort: SortOption = args.sort.parse()?;
    let mut config = FilterConfig::new()
        .with_offers_only(args.offers)
        .with_high_rated_only(args.high_rated)
        .with_best_selling_only(args.best_sellers)
        .with_sort(sort);
    if let Some(search) = &args.search {
        config.set_search_query(search.as_str());
    }
    if let Some(category) = &args.category {
        config.set_category(category.as_str());
    }
    config.set_page(args.page);
    Ok(config)
}

fn render_page(page: &QueryPage, config: &FilterConfig, ctx: &Context) {
    ctx.output.header(&format!(
        "Products ({} found, sorted by {})",
        page.total_matches,
        config.sort_by().display_name()
    ));

    if page.total_matches == 0 {
        ctx.output.info("No products match these filters.");
        ctx.output
            .info("Run `nutcart browse` without filters to clear them all.");
        return;
    }

    if page.is_empty() {
        ctx.output.warn(&format!(
            "Page {} is past the last page ({}).",
            page.page, page.total_pages
        ));
        return;
    }

    for product in &page.items {
        ctx.output.product_row(product);
    }

    let pagination = page.pagination();
    println!();
    ctx.output.kv(
        "Showing",
        &format!(
            "{}-{} of {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total
        ),
    );
    if pagination.total_pages > 1 {
        ctx.output.kv(
            "Pages",
            &page_strip(
                &pagination.page_links(),
                pagination.page,
                pagination.has_prev(),
                pagination.has_next(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutcart_commerce::search::ALL_CATEGORIES;

    fn args() -> BrowseArgs {
        BrowseArgs {
            search: None,
            category: None,
            offers: false,
            high_rated: false,
            best_sellers: false,
            sort: "popularity".into(),
            page: 1,
        }
    }

    #[test]
    fn test_page_survives_other_flags() {
        let mut a = args();
        a.offers = true;
        a.search = Some("nut".into());
        a.sort = "price-desc".into();
        a.page = 2;

        let config = filter_config(&a).unwrap();
        assert_eq!(config.current_page(), 2);
        assert!(config.offers_only());
        assert_eq!(config.sort_by(), SortOption::PriceDesc);
    }

    #[test]
    fn test_defaults() {
        let config = filter_config(&args()).unwrap();
        assert_eq!(config.category(), ALL_CATEGORIES);
        assert!(!config.has_active_filters());
    }

    #[test]
    fn test_bad_sort() {
        let mut a = args();
        a.sort = "cheapest".into();
        assert!(filter_config(&a).is_err());
    }
}
