//! Cart lines and their identity key.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Clamp a requested quantity into the valid range `1..=u32::MAX`.
///
/// Zero and negative requests become 1; lines are never removed by lowering
/// their quantity.
pub fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}

/// Identity of a cart line: product plus variant selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl LineKey {
    pub fn new(product_id: ProductId, color: Option<&str>, size: Option<&str>) -> Self {
        Self {
            product_id,
            color: color.map(str::to_string),
            size: size.map(str::to_string),
        }
    }
}

/// One entry in the cart.
///
/// The product is embedded as a snapshot so the cart can be rendered and
/// priced without consulting the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Chosen color, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    /// Chosen size, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartLine {
    /// Create a line; the quantity is clamped to at least 1.
    pub fn new(
        product: Product,
        quantity: i64,
        selected_color: Option<String>,
        selected_size: Option<String>,
    ) -> Self {
        Self {
            product,
            quantity: clamp_quantity(quantity),
            selected_color,
            selected_size,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// This line's identity key.
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id,
            self.selected_color.as_deref(),
            self.selected_size.as_deref(),
        )
    }

    /// Check whether this line has the given identity without allocating.
    pub fn has_key(&self, product_id: ProductId, color: Option<&str>, size: Option<&str>) -> bool {
        self.product.id == product_id
            && self.selected_color.as_deref() == color
            && self.selected_size.as_deref() == size
    }

    /// Effective unit price, recomputed from the product snapshot.
    pub fn unit_price(&self) -> Money {
        self.product.effective_price()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().saturating_multiply(i64::from(self.quantity))
    }

    /// Human-readable variant label (e.g., "Red / M").
    pub fn variant_label(&self) -> Option<String> {
        match (self.selected_color.as_deref(), self.selected_size.as_deref()) {
            (Some(color), Some(size)) => Some(format!("{color} / {size}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}
