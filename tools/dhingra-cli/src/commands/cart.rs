//! Cart commands.

use anyhow::Result;
use dhingra_commerce::cart::CartStore;
use dhingra_commerce::ProductId;
use dialoguer::Confirm;
use serde_json::json;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::shipping_label;

const WIDTHS: [usize; 5] = [4, 28, 16, 5, 14];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add {
            id,
            quantity,
            color,
            size,
        } => {
            let catalog = ctx.catalog()?;
            let product = catalog.require_product(id)?;
            product.check_variant(color.as_deref(), size.as_deref())?;
            store.add(product, quantity, color.as_deref(), size.as_deref());
        }
        CartCommand::Remove { id } => {
            warn_if_absent(&store, id, ctx);
            store.remove(id);
        }
        CartCommand::Set { id, quantity } => {
            if warn_if_absent(&store, id, ctx) {
                return Ok(());
            }
            store.set_quantity(id, quantity);
            let name = store
                .lines()
                .iter()
                .find(|l| l.product_id() == id)
                .map_or_else(|| id.to_string(), |l| l.product.name.clone());
            ctx.output.success(&format!("{} quantity set to {}", name, quantity.max(1)));
        }
        CartCommand::Clear { yes } => {
            if store.is_empty() {
                ctx.output.info("Your cart is already empty");
                return Ok(());
            }
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Remove all {} items from your cart?",
                        store.total_items()
                    ))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Cancelled");
                    return Ok(());
                }
            }
            store.clear();
        }
    }

    show(&store, ctx);
    Ok(())
}

/// Warn when no line holds `id`; returns whether it was absent.
fn warn_if_absent(store: &CartStore, id: ProductId, ctx: &Context) -> bool {
    let absent = store.cart().lines_for(id).next().is_none();
    if absent {
        ctx.output.warn(&format!("Product {} is not in your cart", id));
    }
    absent
}

fn show(store: &CartStore, ctx: &Context) {
    let policy = ctx.config.shipping_policy();
    let summary = store.summary(&policy);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "lines": store.lines(),
            "summary": summary,
        }));
        return;
    }

    ctx.output.header("Your Cart");
    if store.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output
        .table_row(&["ID", "Product", "Variant", "Qty", "Total"], &WIDTHS);
    for line in store.lines() {
        let id = line.product_id().to_string();
        let variant = line.variant_label().unwrap_or_else(|| "-".to_string());
        let quantity = line.quantity.to_string();
        let total = line.line_total().to_string();
        ctx.output.table_row(
            &[
                id.as_str(),
                line.product.name.as_str(),
                variant.as_str(),
                quantity.as_str(),
                total.as_str(),
            ],
            &WIDTHS,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("items", &summary.item_count.to_string());
    ctx.output.kv("subtotal", &summary.subtotal.to_string());
    ctx.output.kv("shipping", &shipping_label(summary.shipping));
    ctx.output.kv("total", &summary.grand_total.to_string());

    if !summary.ships_free() {
        ctx.output.info(&format!(
            "Free shipping on orders over {}",
            policy.free_over
        ));
    }
}
