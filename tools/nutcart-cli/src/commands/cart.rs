//! Cart management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use nutcart_commerce::cart::CartPricing;
use nutcart_commerce::storefront::Storefront;
use nutcart_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    match args.command {
        Some(CartCommand::Show) | None => show_cart(&store, ctx),
        Some(CartCommand::Add { id, quantity }) => {
            let id = ProductId::new(id);
            let total = store.add_to_cart(&id, quantity)?;
            ctx.output
                .success(&format!("Added {} × {} (now {} in cart)", quantity, title(&store, &id), total));
            report_counts(&store, ctx);
            Ok(())
        }
        Some(CartCommand::Inc { id }) => adjust(&mut store, ProductId::new(id), 1, ctx),
        Some(CartCommand::Dec { id }) => adjust(&mut store, ProductId::new(id), -1, ctx),
        Some(CartCommand::Remove { id }) => {
            let id = ProductId::new(id);
            if store.remove_from_cart(&id) {
                ctx.output.success(&format!("Removed {} from cart", title(&store, &id)));
            } else {
                ctx.output.info(&format!("Product {} was not in the cart", id));
            }
            report_counts(&store, ctx);
            Ok(())
        }
        Some(CartCommand::Clear { yes }) => clear_cart(&mut store, yes, ctx),
    }
}

fn adjust(store: &mut Storefront, id: ProductId, delta: i64, ctx: &Context) -> Result<()> {
    if !store.update_quantity(&id, delta) {
        bail!("Product {} is not in the cart", id);
    }
    match store.quantity_in_cart(&id) {
        0 => ctx.output.success(&format!("Removed {} from cart", title(store, &id))),
        n => ctx.output.success(&format!("{} quantity is now {}", title(store, &id), n)),
    }
    report_counts(store, ctx);
    Ok(())
}

fn clear_cart(store: &mut Storefront, yes: bool, ctx: &Context) -> Result<()> {
    if store.cart().is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", store.cart_total_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    store.clear_cart();
    ctx.output.success("Cart cleared");
    Ok(())
}

fn show_cart(store: &Storefront, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": store.cart().items(),
            "total_count": store.cart_total_count(),
            "pricing": store.cart_pricing()?,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", store.cart_total_count()));

    if store.cart().is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Run `nutcart browse` to find something tasty.");
        return Ok(());
    }

    print_summary(store, &store.cart_pricing()?, ctx);
    Ok(())
}

/// Print cart lines and the pricing rows.
pub(crate) fn print_summary(store: &Storefront, pricing: &CartPricing, ctx: &Context) {
    let widths = [5, 34, 5, 12];
    ctx.output.table_row(&["ID", "Product", "Qty", "Total"], &widths);
    for (item, line) in store.cart().items().iter().zip(&pricing.line_items) {
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &item.product.title,
                &line.quantity.to_string(),
                &line.total.to_string(),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("Subtotal", &pricing.subtotal.to_string());
    ctx.output.kv("Shipping", &pricing.shipping.to_string());
    ctx.output.kv("Taxes", &pricing.taxes.to_string());
    if pricing.has_discounts() {
        ctx.output.kv("Discount", &format!("-{}", pricing.discount));
    }
    ctx.output.kv("Total", &pricing.total.to_string());
}

fn report_counts(store: &Storefront, ctx: &Context) {
    ctx.output.debug(&format!(
        "cart: {} items, wishlist: {} products",
        store.cart_total_count(),
        store.wishlist_count()
    ));
}

fn title(store: &Storefront, id: &ProductId) -> String {
    store
        .catalog()
        .find(id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| id.to_string())
}
