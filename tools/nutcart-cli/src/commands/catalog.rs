//! Category listing and product detail.

use anyhow::{bail, Result};
use nutcart_commerce::session::ShopSession;
use nutcart_commerce::ProductId;
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{badge_label, price_label, rating_label};

/// List categories in catalog order.
pub fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let categories = catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in categories {
        let count = catalog
            .products()
            .iter()
            .filter(|p| p.category == category)
            .count();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }
    Ok(())
}

#[derive(Serialize)]
struct ProductDetail<'a> {
    #[serde(flatten)]
    product: &'a nutcart_commerce::catalog::Product,
    liked: bool,
    quantity_in_cart: u32,
}

/// Show one product's detail view.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut session = ShopSession::new(ctx.storefront()?);
    let id = ProductId::new(args.id);

    let product = match session.open_product(&id) {
        Some(product) => product,
        None => bail!("Product not found: {}", id),
    };

    let store = session.store();
    let liked = store.is_liked(&product.id);
    let in_cart = store.quantity_in_cart(&product.id);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product: &product,
            liked,
            quantity_in_cart: in_cart,
        });
        return Ok(());
    }

    ctx.output.header(&product.title);
    if !product.badges.is_empty() {
        let badges: Vec<String> = product.badges.iter().map(badge_label).collect();
        ctx.output.kv("Badges", &badges.join(" "));
    }
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Weight", &product.weight);
    ctx.output.kv("Price", &price_label(&product));
    if let Some(pct) = product.discount_percentage() {
        ctx.output.kv("You save", &format!("{:.0}%", pct));
    }
    ctx.output.kv("Rating", &rating_label(product.rating, product.reviews));
    ctx.output.kv("Stock", product.stock_status.display_name());
    ctx.output.kv("Liked", if liked { "yes" } else { "no" });
    ctx.output.kv("In cart", &in_cart.to_string());
    if let Some(description) = &product.description {
        println!();
        println!("  {}", description);
    }
    Ok(())
}
