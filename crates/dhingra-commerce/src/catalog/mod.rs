//! Product catalog module.
//!
//! Contains product and category records and the read-only in-memory
//! catalog that serves lookups, search and listings.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::Product;
pub use store::{Catalog, CatalogDocument, FEATURED_CATEGORY_LIMIT};
