//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;

use clap::{Args, Subcommand};
use dhingra_commerce::search::{SortOption, DEFAULT_PER_PAGE};
use dhingra_commerce::{CategoryId, ProductId};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products in these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<CategoryId>,

    /// Minimum effective price, in major units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum effective price, in major units.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Only show featured products.
    #[arg(long)]
    pub featured: bool,

    /// Sort order: featured, newest, price-low-high, price-high-low.
    #[arg(short, long, default_value = "featured", value_parser = parse_sort)]
    pub sort: SortOption,

    /// Page number (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Products per page.
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: usize,
}

fn parse_sort(slug: &str) -> Result<SortOption, String> {
    SortOption::from_slug(slug).ok_or_else(|| {
        let known: Vec<_> = SortOption::ALL.iter().map(SortOption::slug).collect();
        format!("unknown sort '{}' (expected one of: {})", slug, known.join(", "))
    })
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category ID.
    pub id: CategoryId,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against product names and descriptions.
    pub query: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and the order summary.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        id: ProductId,

        /// Quantity to add.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,

        /// Color option.
        #[arg(long)]
        color: Option<String>,

        /// Size option.
        #[arg(long)]
        size: Option<String>,
    },
    /// Remove a product (every variant) from the cart.
    Remove {
        /// Product ID.
        id: ProductId,
    },
    /// Set the quantity of a product (every variant).
    Set {
        /// Product ID.
        id: ProductId,

        /// New quantity; values below 1 become 1.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove everything from the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
