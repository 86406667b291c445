//! Listing query builder.

use crate::catalog::Product;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size for listings.
pub const DEFAULT_PER_PAGE: usize = 24;

/// Largest page size a query accepts.
pub const MAX_PER_PAGE: usize = 100;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Featured products first, catalog order otherwise.
    #[default]
    Featured,
    /// Effective price, low to high.
    PriceAsc,
    /// Effective price, high to low.
    PriceDesc,
    /// Highest product id first.
    Newest,
}

impl SortOption {
    /// All options, in display order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// URL/CLI slug (e.g., "price-low-high").
    pub fn slug(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-low-high",
            SortOption::PriceDesc => "price-high-low",
            SortOption::Newest => "newest",
        }
    }

    /// Parse a slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.slug() == slug)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
        }
    }

    /// Sort products in place. Ties keep their incoming order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOption::Featured => products.sort_by_key(|p| !p.featured),
            SortOption::PriceAsc => products.sort_by_key(|p| p.effective_price().amount_minor),
            SortOption::PriceDesc => products
                .sort_by_key(|p| std::cmp::Reverse(p.effective_price().amount_minor)),
            SortOption::Newest => products.sort_by_key(|p| std::cmp::Reverse(p.id)),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A listing query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Text query, if any.
    pub query: Option<String>,
    /// Filters to apply (all must match).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl SearchQuery {
    /// Create a query matching every product.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the text query. Blank queries are ignored.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination, clamping to sane bounds.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
