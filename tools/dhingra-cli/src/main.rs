//! Dhingra CLI - Browse the storefront catalog and manage the cart.
//!
//! Commands:
//! - `dhingra products` - List products with filters, sorting and paging
//! - `dhingra product` - Show one product
//! - `dhingra categories` - List categories
//! - `dhingra category` - Show a category and its products
//! - `dhingra search` - Search products by text
//! - `dhingra cart` - Show and change the cart
//! - `dhingra config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CategoryArgs, ConfigArgs, ProductArgs, ProductsArgs, SearchArgs};

/// Dhingra CLI - Browse the Dhingra storefront and manage your cart
#[derive(Parser)]
#[command(name = "dhingra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show product details
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Show a category and its products
    Category(CategoryArgs),

    /// Search products by name or description
    Search(SearchArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins; otherwise warnings only, or debug for our crates with --verbose
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "warn,dhingra=debug,dhingra_commerce=debug,dhingra_cache=debug".into()
        } else {
            "warn".into()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::catalog::products(args, &ctx),
        Commands::Product(args) => commands::catalog::product(args, &ctx),
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Category(args) => commands::catalog::category(args, &ctx),
        Commands::Search(args) => commands::catalog::search(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
