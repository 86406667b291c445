//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use dhingra_commerce::cart::{CartConfig, ShippingPolicy, DEFAULT_CART_KEY};
use dhingra_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`dhingra.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Where the cart snapshot lives.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Pricing settings.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Shipping rule for the order summary.
    #[serde(default)]
    pub shipping: ShippingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Settings for the cart store.
    pub fn cart_config(&self) -> CartConfig {
        CartConfig {
            storage_key: self.storage.cart_key.clone(),
            currency: self.pricing.currency,
        }
    }

    /// Shipping rule in the configured currency.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        let currency = self.pricing.currency;
        ShippingPolicy::new(
            Money::new(self.shipping.free_over_minor, currency),
            Money::new(self.shipping.flat_fee_minor, currency),
        )
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path to the catalog JSON document, relative to the config file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Cart storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding storage slots, relative to the config file.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Slot name for the cart snapshot.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_storage_dir() -> String {
    ".dhingra/storage".to_string()
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            cart_key: default_cart_key(),
        }
    }
}

/// Pricing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Currency cart totals are computed in (default: INR).
    #[serde(default)]
    pub currency: Currency,
}

/// Shipping rule, in minor units of the pricing currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingConfig {
    /// Subtotals strictly above this ship free.
    #[serde(default = "default_free_over")]
    pub free_over_minor: i64,

    /// Flat fee otherwise.
    #[serde(default = "default_flat_fee")]
    pub flat_fee_minor: i64,
}

fn default_free_over() -> i64 {
    500_000
}

fn default_flat_fee() -> i64 {
    25_000
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_over_minor: default_free_over(),
            flat_fee_minor: default_flat_fee(),
        }
    }
}

/// Generate a default dhingra.toml config file.
pub fn generate_default_config() -> String {
    r#"# Dhingra storefront configuration

[catalog]
path = "catalog.json"

[storage]
dir = ".dhingra/storage"
cart_key = "dhingra-cart"

[pricing]
currency = "INR"

[shipping]
# Amounts are in minor units (paise for INR).
free_over_minor = 500000
flat_fee_minor = 25000
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.catalog.path, "catalog.json");
        assert_eq!(config.storage.cart_key, "dhingra-cart");
        assert_eq!(config.pricing.currency, Currency::INR);
    }

    #[test]
    fn test_partial_sections() {
        let config: CliConfig = toml::from_str(
            r#"
[storage]
cart_key = "guest-cart"

[shipping]
flat_fee_minor = 9900
"#,
        )
        .unwrap();

        assert_eq!(config.storage.dir, ".dhingra/storage");
        assert_eq!(config.storage.cart_key, "guest-cart");
        assert_eq!(config.shipping.free_over_minor, 500_000);
        assert_eq!(config.shipping.flat_fee_minor, 9900);
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_shipping_policy() {
        let policy = CliConfig::default().shipping_policy();
        assert_eq!(policy, ShippingPolicy::default());
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"pricing": {"currency": "USD"}}"#).unwrap();
        assert_eq!(config.cart_config().currency, Currency::USD);
        assert_eq!(config.cart_config().storage_key, "dhingra-cart");
    }
}
