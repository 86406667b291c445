//! Product types.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only once loaded; the cart embeds a snapshot of the
/// whole record in each line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price before any discount.
    pub price: Money,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Whether the product is promoted on listings.
    #[serde(default)]
    pub featured: bool,
    /// Percentage discount (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    /// Available color options.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Available size options.
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a product with no discount, options or description.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category_id,
            featured: false,
            discount: None,
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Set the percentage discount.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Set the color options.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the size options.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a (non-zero) discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| d > 0)
    }

    /// Price after the percentage discount, if any.
    ///
    /// Always derived from `price` and `discount`; never stored.
    pub fn effective_price(&self) -> Money {
        match self.discount {
            Some(percent) => self.price.percent_off(percent),
            None => self.price,
        }
    }

    /// Amount saved per unit by the discount.
    pub fn savings(&self) -> Money {
        Money::new(
            self.price.amount_minor - self.effective_price().amount_minor,
            self.price.currency,
        )
    }

    /// Check whether `color` is one of the product's color options.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check whether `size` is one of the product's size options.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check that an optional color/size selection is offered.
    pub fn check_variant(
        &self,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<(), CommerceError> {
        if let Some(color) = color.filter(|c| !self.offers_color(c)) {
            return Err(CommerceError::UnavailableOption {
                product: self.name.clone(),
                option: "Color",
                value: color.to_string(),
            });
        }
        if let Some(size) = size.filter(|s| !self.offers_size(s)) {
            return Err(CommerceError::UnavailableOption {
                product: self.name.clone(),
                option: "Size",
                value: size.to_string(),
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match over name and description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match over name and description.
    pub fn matches_text(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}
