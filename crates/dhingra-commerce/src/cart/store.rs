//! The cart context object.
//!
//! [`CartStore`] owns the current [`Cart`], keeps [`CartTotals`] in step
//! with it, and after every mutation persists a snapshot and emits the
//! matching notification.
//!
//! # Example
//!
//! ```rust,ignore
//! use dhingra_cache::Cache;
//! use dhingra_commerce::prelude::*;
//!
//! let mut store = CartStore::open(Cache::open_dir(".dhingra/storage")?, TracingNotifier);
//! store.add(&saree, 2, Some("Red"), None);
//! println!("{} items, {}", store.total_items(), store.total_price());
//! ```

use std::fmt;
use std::mem;

use dhingra_cache::Cache;
use serde::{Deserialize, Serialize};

use crate::cart::persist::{CartPersister, DEFAULT_CART_KEY};
use crate::cart::{
    reduce, Cart, CartAction, CartLine, CartSummary, CartTotals, LineKey, ShippingPolicy,
    Transition,
};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::notify::Notifier;

/// Settings for a [`CartStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Storage slot holding the snapshot.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Currency totals are computed in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_storage_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency: Currency::default(),
        }
    }
}

/// Shared cart state with derived totals, persistence and notifications.
pub struct CartStore {
    cart: Cart,
    totals: CartTotals,
    currency: Currency,
    persister: CartPersister,
    notifier: Box<dyn Notifier>,
}

impl CartStore {
    /// Open the store with default settings, restoring any saved cart.
    pub fn open(cache: Cache, notifier: impl Notifier + 'static) -> Self {
        Self::with_config(cache, &CartConfig::default(), notifier)
    }

    /// Open the store, restoring any snapshot under `config.storage_key`.
    ///
    /// A missing or unreadable snapshot yields an empty cart. Hydration does
    /// not write back or notify.
    pub fn with_config(
        cache: Cache,
        config: &CartConfig,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let persister = CartPersister::new(cache, config.storage_key.clone());
        let cart = persister.hydrate();
        let totals = CartTotals::of(&cart, config.currency);
        Self {
            cart,
            totals,
            currency: config.currency,
            persister,
            notifier: Box::new(notifier),
        }
    }

    /// Add `quantity` of a product variant.
    ///
    /// Merges with a line of the same product, color and size; otherwise
    /// appends a new line holding a snapshot of `product`.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: i64,
        color: Option<&str>,
        size: Option<&str>,
    ) {
        self.dispatch(CartAction::Add {
            product: product.clone(),
            quantity,
            color: color.map(str::to_string),
            size: size.map(str::to_string),
        });
    }

    /// Remove every line for `product_id`.
    pub fn remove(&mut self, product_id: ProductId) {
        self.dispatch(CartAction::Remove { product_id });
    }

    /// Set the quantity of every line for `product_id`. Values below 1 become 1.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            product_id,
            quantity,
        });
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Apply an action, then persist and notify.
    pub fn dispatch(&mut self, action: CartAction) {
        let Transition { cart, event } = reduce(mem::take(&mut self.cart), action);
        self.cart = cart;
        self.totals = CartTotals::of(&self.cart, self.currency);
        self.persister.observe(&self.cart);

        if let Some(event) = event {
            tracing::debug!(?event, items = self.totals.item_count, "cart changed");
            self.notifier.notify(event.notification());
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.cart.line(key)
    }

    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Sum of line quantities.
    pub fn total_items(&self) -> u64 {
        self.totals.item_count
    }

    /// Sum of effective unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.totals.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Storage slot holding the snapshot.
    pub fn storage_key(&self) -> &str {
        self.persister.key()
    }

    /// Order summary under `policy`.
    pub fn summary(&self, policy: &ShippingPolicy) -> CartSummary {
        CartSummary::new(&self.totals, policy)
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("totals", &self.totals)
            .field("persister", &self.persister)
            .finish_non_exhaustive()
    }
}
