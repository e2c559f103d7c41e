//! Wishlist commands.

use anyhow::Result;
use nutcart_commerce::storefront::Storefront;
use nutcart_commerce::ProductId;
use serde::Serialize;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

#[derive(Serialize)]
struct LikedEntry {
    #[serde(flatten)]
    product: std::sync::Arc<nutcart_commerce::catalog::Product>,
    quantity_in_cart: u32,
}

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    match args.command {
        Some(WishlistCommand::Show) | None => show_wishlist(&store, ctx),
        Some(WishlistCommand::Toggle { id }) => {
            let id = ProductId::new(id);
            if store.toggle_like(&id)? {
                ctx.output.success(&format!("Added {} to wishlist", id));
            } else {
                ctx.output.success(&format!("Removed {} from wishlist", id));
            }
            ctx.output
                .debug(&format!("wishlist: {} products", store.wishlist_count()));
            Ok(())
        }
    }
}

fn show_wishlist(store: &Storefront, ctx: &Context) -> Result<()> {
    let entries: Vec<LikedEntry> = store
        .liked_products()
        .into_iter()
        .map(|product| LikedEntry {
            quantity_in_cart: store.quantity_in_cart(&product.id),
            product,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output
        .header(&format!("Wishlist ({} products)", store.wishlist_count()));

    if entries.is_empty() {
        ctx.output.info("Nothing liked yet.");
        ctx.output
            .info("Run `nutcart wishlist toggle <id>` to like a product.");
        return Ok(());
    }

    for entry in &entries {
        ctx.output.product_row(&entry.product);
        if entry.quantity_in_cart > 0 {
            ctx.output
                .kv("      in cart", &entry.quantity_in_cart.to_string());
        }
    }
    Ok(())
}
