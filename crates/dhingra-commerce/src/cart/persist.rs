//! Cart snapshot persistence.

use dhingra_cache::Cache;

use crate::cart::{Cart, CartLine};
use crate::error::CommerceError;

/// Default storage slot for the cart snapshot.
pub const DEFAULT_CART_KEY: &str = "dhingra-cart";

/// Reads and writes the cart snapshot in one named cache slot.
///
/// The snapshot is a JSON array of [`CartLine`]s. There is no schema
/// version: anything that fails to decode is treated as no snapshot.
#[derive(Debug)]
pub struct CartPersister {
    cache: Cache,
    key: String,
}

impl CartPersister {
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// Storage slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot, if any.
    pub fn load(&self) -> Result<Option<Cart>, CommerceError> {
        let lines: Option<Vec<CartLine>> = self.cache.get(&self.key)?;
        Ok(lines.map(Cart::from_lines))
    }

    /// Write a snapshot of `cart`.
    pub fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cache.set(&self.key, cart.lines())?;
        Ok(())
    }

    /// Load the stored cart, falling back to empty on absence or failure.
    pub fn hydrate(&self) -> Cart {
        match self.load() {
            Ok(Some(cart)) => {
                tracing::debug!(key = %self.key, lines = cart.len(), "cart restored");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable cart snapshot");
                Cart::new()
            }
        }
    }

    /// Persist after a transition. Failures are logged and otherwise ignored.
    pub fn observe(&self, cart: &Cart) {
        if let Err(e) = self.save(cart) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart snapshot");
        }
    }
}
