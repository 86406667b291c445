//! Output formatting for the CLI.
//!
//! Human-readable lines are suppressed under `--json`, where commands print a
//! single JSON document on stdout instead.

use console::{style, StyledObject};
use dhingra_commerce::catalog::Product;
use dhingra_commerce::notify::Notification;
use dhingra_commerce::Money;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    fn status(&self, badge: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", badge, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    /// Print a warning to stderr.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Print an error to stderr, as `{"error": ...}` in JSON mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Print a debug line (only with `--verbose`).
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a cart notification as a toast-style line.
    pub fn notification(&self, notification: &Notification) {
        let line = format!(
            "{} {}",
            style(&notification.title).bold(),
            style(&notification.description).dim()
        );
        self.success(&line);
    }

    /// Print a value as pretty JSON on stdout.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "failed to encode JSON output"),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{col:width$}"))
            .collect();
        println!("  {}", row.join("  "));
    }
}

/// Effective price, with the base price struck through when discounted.
pub fn price_label(product: &Product) -> String {
    match product.discount.filter(|d| *d > 0) {
        Some(discount) => format!(
            "{} {} {}",
            style(product.effective_price()).bold(),
            style(product.price).dim().strikethrough(),
            style(format!("-{discount}%")).red()
        ),
        None => style(product.price).bold().to_string(),
    }
}

/// Shipping amount, or "Free".
pub fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        style("Free").green().to_string()
    } else {
        shipping.to_string()
    }
}
