//! Catalog browsing commands.

use anyhow::Result;
use dhingra_commerce::catalog::{Catalog, Product, FEATURED_CATEGORY_LIMIT};
use dhingra_commerce::search::{Filter, SearchQuery};
use dhingra_commerce::Money;
use serde_json::json;

use super::{CategoryArgs, ProductArgs, ProductsArgs, SearchArgs};
use crate::context::Context;
use crate::output::price_label;

const WIDTHS: [usize; 4] = [4, 28, 10, 16];

/// Run the products command.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let currency = catalog.currency();

    let mut query = SearchQuery::new()
        .with_sort(args.sort)
        .with_pagination(args.page, args.per_page);
    if !args.categories.is_empty() {
        query = query.with_filter(Filter::categories(args.categories));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        query = query.with_filter(Filter::price_range(
            args.min_price.map(|m| Money::from_major(m, currency)),
            args.max_price.map(|m| Money::from_major(m, currency)),
        ));
    }
    if args.featured {
        query = query.with_filter(Filter::Featured);
    }

    let results = catalog.query(&query);
    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", query.sort.display_name()));
    if results.is_empty() {
        ctx.output.info("No products match these filters");
        return Ok(());
    }

    print_table(&results.items, &catalog, ctx);

    let page = &results.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages
    ));
    Ok(())
}

/// Run the product command.
pub fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require_product(args.id)?;
    let category = catalog.category(product.category_id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "effective_price": product.effective_price(),
            "category": category,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv(
        "category",
        category.map_or("Uncategorized", |c| c.name.as_str()),
    );
    ctx.output.kv("price", &price_label(product));
    if product.has_discount() {
        ctx.output.kv("you save", &product.savings().to_string());
    }
    if product.featured {
        ctx.output.kv("featured", "yes");
    }
    if !product.colors.is_empty() {
        ctx.output.kv("colors", &product.colors.join(", "));
    }
    if !product.sizes.is_empty() {
        ctx.output.kv("sizes", &product.sizes.join(", "));
    }
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "categories": catalog.categories(),
            "featured": catalog.featured_categories(FEATURED_CATEGORY_LIMIT),
        }));
        return Ok(());
    }

    ctx.output.header("Categories");
    let featured = catalog.featured_categories(FEATURED_CATEGORY_LIMIT);
    for category in catalog.categories() {
        let count = catalog.products_in_category(category.id).len();
        let marker = if featured.iter().any(|c| c.id == category.id) {
            " ★"
        } else {
            ""
        };
        ctx.output.list_item(&format!(
            "{}. {} ({} products){}",
            category.id, category.name, count, marker
        ));
    }

    Ok(())
}

/// Run the category command.
pub fn category(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let category = catalog.require_category(args.id)?;
    let products = catalog.products_in_category(category.id);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "category": category,
            "products": products,
        }));
        return Ok(());
    }

    ctx.output.header(&category.name);
    if !category.description.is_empty() {
        ctx.output.info(&category.description);
    }
    if products.is_empty() {
        ctx.output.info("No products in this category yet");
    } else {
        print_table(&products, &catalog, ctx);
    }

    Ok(())
}

/// Run the search command.
pub fn search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.search(&args.query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Results for \"{}\"", args.query));
    if products.is_empty() {
        ctx.output.info("No products found");
    } else {
        print_table(&products, &catalog, ctx);
    }

    Ok(())
}

fn print_table(products: &[&Product], catalog: &Catalog, ctx: &Context) {
    ctx.output.table_row(&["ID", "Name", "Category", "Price"], &WIDTHS);
    for product in products {
        let id = product.id.to_string();
        let category = catalog
            .category(product.category_id)
            .map_or("-", |c| c.name.as_str());
        let mut price = product.effective_price().to_string();
        if let Some(discount) = product.discount.filter(|d| *d > 0) {
            price.push_str(&format!(" -{discount}%"));
        }
        let name = if product.featured {
            format!("{} ★", product.name)
        } else {
            product.name.clone()
        };
        ctx.output
            .table_row(&[id.as_str(), name.as_str(), category, price.as_str()], &WIDTHS);
    }
}
