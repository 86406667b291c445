//! Listing filter types.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A listing filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Product belongs to any of these categories (empty = no restriction).
    Categories(Vec<CategoryId>),
    /// Effective price within an inclusive range.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Case-insensitive substring of name or description.
    Text(String),
    /// Only featured products.
    Featured,
}

impl Filter {
    /// Create a single-category filter.
    pub fn category(id: CategoryId) -> Self {
        Filter::Categories(vec![id])
    }

    /// Create a multi-category filter.
    pub fn categories(ids: impl IntoIterator<Item = CategoryId>) -> Self {
        Filter::Categories(ids.into_iter().collect())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Categories(ids) => ids.is_empty() || ids.contains(&product.category_id),
            Filter::PriceRange { min, max } => {
                let price = product.effective_price();
                let above_min = min.map_or(true, |min| {
                    min.currency == price.currency && price.amount_minor >= min.amount_minor
                });
                let below_max = max.map_or(true, |max| {
                    max.currency == price.currency && price.amount_minor <= max.amount_minor
                });
                above_min && below_max
            }
            Filter::Text(query) => product.matches_text(query),
            Filter::Featured => product.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn rupees(amount: i64) -> Money {
        Money::from_major(amount, Currency::INR)
    }

    fn suit() -> Product {
        Product::new(ProductId::new(2), "Cotton Salwar Suit", rupees(3500), CategoryId::new(2))
            .with_discount(10)
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        // Base price 3500, effective 3150.
        let product = suit();
        assert!(Filter::price_range(None, Some(rupees(3150))).matches(&product));
        assert!(!Filter::price_range(None, Some(rupees(3149))).matches(&product));
        assert!(Filter::price_range(Some(rupees(3150)), None).matches(&product));
        assert!(!Filter::price_range(Some(rupees(3200)), None).matches(&product));
    }

    #[test]
    fn test_category_filter() {
        let product = suit();
        assert!(Filter::category(CategoryId::new(2)).matches(&product));
        assert!(!Filter::category(CategoryId::new(1)).matches(&product));
        assert!(Filter::categories([CategoryId::new(1), CategoryId::new(2)]).matches(&product));
        assert!(Filter::Categories(Vec::new()).matches(&product));
    }

    #[test]
    fn test_text_and_featured() {
        let product = suit();
        assert!(Filter::text("cotton").matches(&product));
        assert!(!Filter::Featured.matches(&product));
        assert!(Filter::Featured.matches(&product.clone().featured()));
    }
}
