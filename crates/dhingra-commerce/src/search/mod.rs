//! Listing module.
//!
//! Filters, sort orders and pagination for browsing the catalog.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, SortOption, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use results::{Pagination, SearchResults};
