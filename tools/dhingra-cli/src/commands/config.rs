//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};
use crate::output::shipping_label;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        &ctx.resolve_path(&config.catalog.path).display().to_string(),
    );

    ctx.output.info("[storage]");
    ctx.output.kv(
        "dir",
        &ctx.resolve_path(&config.storage.dir).display().to_string(),
    );
    ctx.output.kv("cart_key", &config.storage.cart_key);

    ctx.output.info("[pricing]");
    ctx.output.kv("currency", config.pricing.currency.code());

    let policy = config.shipping_policy();
    ctx.output.info("[shipping]");
    ctx.output.kv("free_over", &policy.free_over.to_string());
    ctx.output.kv("flat_fee", &shipping_label(policy.flat_fee));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
