//! Shopping cart module.
//!
//! Contains the cart state and its reducer, derived totals, snapshot
//! persistence, and the [`CartStore`] that ties them together.

mod line;
mod persist;
mod pricing;
mod state;
mod store;

pub use line::{clamp_quantity, CartLine, LineKey};
pub use persist::{CartPersister, DEFAULT_CART_KEY};
pub use pricing::{CartSummary, CartTotals, ShippingPolicy};
pub use state::{reduce, Cart, CartAction, CartEvent, Transition};
pub use store::{CartConfig, CartStore};
