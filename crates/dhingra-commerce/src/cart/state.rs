//! Cart state and its pure transition function.
//!
//! [`reduce`] maps a cart and an action to the next cart plus an optional
//! event. It performs no I/O; persistence and notification happen in
//! [`CartStore`](crate::cart::CartStore) after each transition.

use crate::cart::line::{clamp_quantity, CartLine, LineKey};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::notify::Notification;
use serde::Serialize;

/// An insertion-ordered sequence of cart lines with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary lines, restoring the invariants.
    ///
    /// Quantities below 1 are raised to 1, and lines sharing a key are merged
    /// into the first occurrence.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            line.quantity = line.quantity.max(1);
            let existing = cart.lines.iter_mut().find(|l| {
                l.has_key(
                    line.product.id,
                    line.selected_color.as_deref(),
                    line.selected_size.as_deref(),
                )
            });
            match existing {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line with exactly this key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| {
            l.has_key(key.product_id, key.color.as_deref(), key.size.as_deref())
        })
    }

    /// All lines for a product, across variants.
    pub fn lines_for(&self, product_id: ProductId) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(move |l| l.product_id() == product_id)
    }

    /// Sum of all line quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// A requested cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` of a product variant, merging with an identical line.
    Add {
        product: Product,
        quantity: i64,
        color: Option<String>,
        size: Option<String>,
    },
    /// Remove every line for a product, whatever its variant.
    Remove { product_id: ProductId },
    /// Set the quantity of every line for a product, whatever its variant.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Remove all lines.
    Clear,
}

/// What a transition did, for user-facing feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    ItemAdded { product_name: String },
    /// An existing line's quantity grew.
    QuantityUpdated { product_name: String },
    /// Lines for a product were removed (possibly none).
    ItemRemoved {
        product_id: ProductId,
        lines_removed: usize,
    },
    /// The cart was emptied.
    Cleared,
}

impl CartEvent {
    /// The transient message shown for this event.
    pub fn notification(&self) -> Notification {
        match self {
            CartEvent::ItemAdded { product_name } => Notification::new(
                "Added to cart",
                format!("{product_name} added to your cart."),
            ),
            CartEvent::QuantityUpdated { product_name } => Notification::new(
                "Cart updated",
                format!("{product_name} quantity updated in your cart."),
            ),
            CartEvent::ItemRemoved { .. } => {
                Notification::new("Item removed", "Item removed from your cart.")
            }
            CartEvent::Cleared => Notification::new(
                "Cart cleared",
                "All items have been removed from your cart.",
            ),
        }
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub cart: Cart,
    pub event: Option<CartEvent>,
}

/// Apply `action` to `cart`, returning the next state.
pub fn reduce(mut cart: Cart, action: CartAction) -> Transition {
    let event = match action {
        CartAction::Add {
            product,
            quantity,
            color,
            size,
        } => {
            let quantity = clamp_quantity(quantity);
            let existing = cart
                .lines
                .iter_mut()
                .find(|l| l.has_key(product.id, color.as_deref(), size.as_deref()));
            match existing {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(quantity);
                    Some(CartEvent::QuantityUpdated {
                        product_name: product.name,
                    })
                }
                None => {
                    let product_name = product.name.clone();
                    cart.lines.push(CartLine {
                        product,
                        quantity,
                        selected_color: color,
                        selected_size: size,
                    });
                    Some(CartEvent::ItemAdded { product_name })
                }
            }
        }
        CartAction::Remove { product_id } => {
            let before = cart.lines.len();
            cart.lines.retain(|l| l.product_id() != product_id);
            Some(CartEvent::ItemRemoved {
                product_id,
                lines_removed: before - cart.lines.len(),
            })
        }
        CartAction::SetQuantity {
            product_id,
            quantity,
        } => {
            let quantity = clamp_quantity(quantity);
            for line in cart.lines.iter_mut().filter(|l| l.product_id() == product_id) {
                line.quantity = quantity;
            }
            None
        }
        CartAction::Clear => {
            cart.lines.clear();
            Some(CartEvent::Cleared)
        }
    };

    Transition { cart, event }
}
