//! Storefront domain types and logic for Dhingra.
//!
//! This crate provides the pieces behind the Dhingra clothing storefront:
//!
//! - **Catalog**: Products, categories, discounts and variant options
//! - **Cart**: Variant-aware cart with derived totals, persisted snapshots
//!   and notifications
//! - **Search**: Category, price, text and featured filters with sorting and
//!   pagination
//!
//! # Example
//!
//! ```rust,ignore
//! use dhingra_cache::Cache;
//! use dhingra_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(&std::fs::read_to_string("catalog.json")?)?;
//! let saree = catalog.require_product(ProductId::new(1))?;
//!
//! let mut cart = CartStore::open(Cache::in_memory(), TracingNotifier);
//! cart.add(saree, 1, Some("Red"), None);
//!
//! let summary = cart.summary(&ShippingPolicy::default());
//! println!("Total: {}", summary.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{NoopNotifier, Notification, Notifier, TracingNotifier};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogDocument, Category, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartAction, CartConfig, CartEvent, CartLine, CartStore, CartSummary, CartTotals,
        LineKey, ShippingPolicy,
    };

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};
}
