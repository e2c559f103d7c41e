//! End-to-end scenarios over the catalog, store and session.

use std::sync::Arc;

use nutcart_cache::{Cache, MemoryBackend};
use nutcart_commerce::prelude::*;
use nutcart_commerce::storefront::{cart_key, liked_key};

/// Twenty products with eight offers: indices 5, 10, 15, 20 and the even
/// indices up to 8.
fn twenty_products() -> Vec<RawProduct> {
    (1..=20u32)
        .map(|i| {
            let offer = i % 5 == 0 || (i % 2 == 0 && i % 10 != 0 && i <= 8);
            let mut tags = Vec::new();
            if offer {
                tags.push("offer".to_string());
            }
            if i % 3 == 0 {
                tags.push("best seller".to_string());
            }
            RawProduct {
                title: Some(format!("Product {i}")),
                price: f64::from(100 + (i * 37) % 400),
                weight_g: 250,
                rating: 3.0 + (i % 5) as f32 * 0.5,
                review_count: (i * 53) % 17,
                image: format!("https://img.example/{i}.jpg"),
                category: if i % 2 == 0 { "Nuts" } else { "Dates" }.to_string(),
                stock_status: "in_stock".to_string(),
                tags,
                ..Default::default()
            }
        })
        .collect()
}

fn twenty_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_raw(twenty_products(), Currency::INR).unwrap())
}

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin(Currency::INR).unwrap())
}

#[test]
fn offers_filter_returns_every_offer_with_marked_up_original_price() {
    let catalog = twenty_catalog();
    let offers = catalog.products().iter().filter(|p| p.is_on_offer()).count();
    assert_eq!(offers, 8);

    let page = query(catalog.products(), &FilterConfig::new().with_offers_only(true));
    assert_eq!(page.total_matches, 8);
    assert_eq!(page.total_pages, 1);

    for product in &page.items {
        let expected = (product.price.to_decimal() * 1.2).round();
        let original = product.original_price.expect("offer carries original price");
        assert_eq!(original.to_decimal(), expected);
    }
}

#[test]
fn page_size_and_page_count_invariants() {
    let catalog = twenty_catalog();
    let configs = [
        FilterConfig::new(),
        FilterConfig::new().with_page(2),
        FilterConfig::new().with_page(3),
        FilterConfig::new().with_category("Nuts"),
        FilterConfig::new().with_search("product 1"),
        FilterConfig::new().with_search("nothing here"),
        FilterConfig::new().with_high_rated_only(true).with_sort(SortOption::PriceDesc),
    ];

    for config in configs {
        let page = query(catalog.products(), &config);
        assert!(page.len() <= PAGE_SIZE);
        assert!(page.len() <= page.total_pages as usize * PAGE_SIZE);
        assert_eq!(page.total_pages == 0, page.total_matches == 0);
    }

    let first = query(catalog.products(), &FilterConfig::new());
    let second = query(catalog.products(), &FilterConfig::new().with_page(2));
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.len(), 12);
    assert_eq!(second.len(), 8);
}

#[test]
fn sorted_output_is_ordered_and_stable() {
    let catalog = twenty_catalog();

    for sort in SortOption::ALL {
        let config = FilterConfig::new().with_sort(sort);
        let mut all = Vec::new();
        let mut page_no = 1;
        loop {
            let page = query(catalog.products(), &config.clone().with_page(page_no));
            if page.is_empty() {
                break;
            }
            all.extend(page.items);
            page_no += 1;
        }
        assert_eq!(all.len(), 20);

        for pair in all.windows(2) {
            let ord = sort.compare(&pair[0], &pair[1]);
            assert_ne!(ord, std::cmp::Ordering::Greater, "{sort} out of order");
            if ord == std::cmp::Ordering::Equal {
                assert!(pair[0].load_index < pair[1].load_index, "{sort} not stable");
            }
        }
    }
}

#[test]
fn search_cash_finds_roasted_cashews() {
    let catalog = builtin();
    let page = query(catalog.products(), &FilterConfig::new().with_search("cash"));
    assert!(page.items.iter().any(|p| p.title == "Roasted Cashews – 250g"));
    assert!(page
        .items
        .iter()
        .all(|p| p.title.to_lowercase().contains("cash") || p.category.to_lowercase().contains("cash")));
}

#[test]
fn page_resets_when_offers_toggled() {
    let mut config = FilterConfig::new();
    config.set_page(3);
    config.toggle_offers_only();
    assert_eq!(config.current_page(), 1);
}

#[test]
fn cart_persists_and_reloads_equal() {
    let catalog = builtin();
    let backend = MemoryBackend::new();

    let mut store = Storefront::open(Arc::clone(&catalog), Cache::with_backend(backend.clone()));
    store.add_to_cart(&ProductId::new("5"), 1).unwrap();
    store.add_to_cart(&ProductId::new("5"), 1).unwrap();
    store.add_to_cart(&ProductId::new("12"), 3).unwrap();
    store.update_quantity(&ProductId::new("12"), -1);
    store.toggle_like(&ProductId::new("15")).unwrap();
    store.toggle_like(&ProductId::new("2")).unwrap();

    let reloaded = Storefront::open(Arc::clone(&catalog), Cache::with_backend(backend));
    assert_eq!(reloaded.cart(), store.cart());
    assert_eq!(reloaded.liked(), store.liked());
    assert_eq!(reloaded.quantity_in_cart(&ProductId::new("5")), 2);
    assert_eq!(reloaded.quantity_in_cart(&ProductId::new("12")), 2);
    assert_eq!(reloaded.cart_total_count(), 4);
    assert_eq!(reloaded.wishlist_count(), 2);
}

#[test]
fn single_item_decrement_empties_cart() {
    let mut store = Storefront::open(builtin(), Cache::in_memory());
    store.add_to_cart(&ProductId::new("3"), 1).unwrap();
    store.update_quantity(&ProductId::new("3"), -1);
    assert!(store.cart().is_empty());
    assert_eq!(store.cart_total_count(), 0);
}

#[test]
fn malformed_or_stale_storage_never_fails() {
    let catalog = builtin();
    let cache = Cache::in_memory();
    cache.set_raw(&cart_key(), b"[{\"product_id\": 5}]").unwrap();
    cache.set_raw(&liked_key(), b"not json at all").unwrap();
    let store = Storefront::open(Arc::clone(&catalog), cache);
    assert!(store.cart().is_empty());
    assert_eq!(store.wishlist_count(), 0);

    let cache = Cache::in_memory();
    cache
        .set_raw(
            &cart_key(),
            br#"[{"product_id": "1", "quantity": 2}, {"product_id": "31337", "quantity": 1}]"#,
        )
        .unwrap();
    let store = Storefront::open(catalog, cache);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.quantity_in_cart(&ProductId::new("1")), 2);
}

#[test]
fn shopping_session_walkthrough() {
    let catalog = builtin();
    let mut session = ShopSession::new(Storefront::open(catalog, Cache::in_memory()));

    session.filters_mut().set_category("Dates");
    let page = session.visible_products();
    assert!(page.items.iter().all(|p| p.category == "Dates"));

    let medjool = page
        .items
        .iter()
        .find(|p| p.title == "Medjool Dates")
        .cloned()
        .unwrap();
    assert_eq!(page.items[0].id, medjool.id, "most reviewed date comes first");

    session.open_product(&medjool.id).unwrap();
    session.store_mut().add_to_cart(&medjool.id, 2).unwrap();
    session.store_mut().toggle_like(&medjool.id).unwrap();
    session.open_cart();

    let pricing = session.store().cart_pricing().unwrap();
    assert_eq!(pricing.total, medjool.price.try_multiply(2).unwrap());

    session.open_checkout();
    let confirmation = session.place_order().unwrap();
    assert_eq!(confirmation.item_count, 2);
    assert_eq!(session.view(), &View::Home);
    assert!(session.store().is_liked(&medjool.id));
    assert_eq!(session.store().cart_total_count(), 0);
}

#[test]
fn directory_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = builtin();

    {
        let mut store = Storefront::open(Arc::clone(&catalog), Cache::open_dir(dir.path()).unwrap());
        store.add_to_cart(&ProductId::new("20"), 3).unwrap();
        store.toggle_like(&ProductId::new("9")).unwrap();
    }

    let store = Storefront::open(catalog, Cache::open_dir(dir.path()).unwrap());
    assert_eq!(store.quantity_in_cart(&ProductId::new("20")), 3);
    assert!(store.is_liked(&ProductId::new("9")));
}
