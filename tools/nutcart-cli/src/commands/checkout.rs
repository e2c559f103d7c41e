//! Checkout command.

use anyhow::Result;
use dialoguer::Confirm;
use nutcart_commerce::session::ShopSession;

use super::CheckoutArgs;
use crate::commands::cart::print_summary;
use crate::context::Context;
use crate::output::format_timestamp;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut session = ShopSession::new(ctx.storefront()?);
    session.open_checkout();

    if session.store().cart().is_empty() {
        ctx.output.info("Your cart is empty, nothing to check out.");
        return Ok(());
    }

    let pricing = session.store().cart_pricing()?;
    if !ctx.output.is_json() {
        ctx.output.header("Checkout");
        print_summary(session.store(), &pricing, ctx);
        println!();
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", pricing.total))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let confirmation = session.place_order()?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Order placed: {} items for {}",
        confirmation.item_count, confirmation.subtotal
    ));
    ctx.output.kv("Placed at", &format_timestamp(confirmation.placed_at));
    ctx.output.info("Thank you for shopping with NutCart!");
    Ok(())
}
