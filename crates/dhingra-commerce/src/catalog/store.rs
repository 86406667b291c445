//! Read-only in-memory catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Currency;
use crate::search::{Pagination, SearchQuery, SearchResults};

/// Number of categories shown in a "featured categories" strip.
pub const FEATURED_CATEGORY_LIMIT: usize = 4;

/// Serialized catalog: `{ "categories": [...], "products": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Product and category lookups over a fixed, validated data set.
///
/// Records keep their declaration order; lookups by id go through an index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    category_index: HashMap<CategoryId, usize>,
    product_index: HashMap<ProductId, usize>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog, validating ids, discounts and currency.
    ///
    /// Products may reference categories that are not listed; they are
    /// simply never returned by a category listing of a known category.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if category_index.insert(category.id, pos).is_some() {
                return Err(CommerceError::DuplicateId {
                    kind: "category",
                    id: category.id.get(),
                });
            }
        }

        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        let mut product_index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if product_index.insert(product.id, pos).is_some() {
                return Err(CommerceError::DuplicateId {
                    kind: "product",
                    id: product.id.get(),
                });
            }
            if let Some(discount) = product.discount.filter(|d| *d > 100) {
                return Err(CommerceError::InvalidDiscount {
                    product_id: product.id,
                    discount,
                });
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }

        tracing::debug!(
            categories = categories.len(),
            products = products.len(),
            %currency,
            "catalog loaded"
        );

        Ok(Self {
            categories,
            products,
            category_index,
            product_index,
            currency,
        })
    }

    /// Build a catalog from a parsed document.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CommerceError> {
        Self::new(doc.categories, doc.products)
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Currency shared by every product.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index
            .get(&id)
            .and_then(|&pos| self.products.get(pos))
    }

    /// Look up a product, reporting a miss as an error.
    pub fn require_product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.product(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Look up a category.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index
            .get(&id)
            .and_then(|&pos| self.categories.get(pos))
    }

    /// Look up a category, reporting a miss as an error.
    pub fn require_category(&self, id: CategoryId) -> Result<&Category, CommerceError> {
        self.category(id).ok_or(CommerceError::CategoryNotFound(id))
    }

    /// Products in a category, in catalog order.
    pub fn products_in_category(&self, id: CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == id)
            .collect()
    }

    /// Case-insensitive substring search over product name and description.
    ///
    /// An empty query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Products flagged as featured.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// The first `limit` categories.
    pub fn featured_categories(&self, limit: usize) -> &[Category] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Run a listing query: filter, sort, then paginate.
    pub fn query(&self, query: &SearchQuery) -> SearchResults<&Product> {
        let mut matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .collect();
        query.sort.sort(&mut matched);

        let pagination = Pagination::new(query.page, query.per_page, matched.len());
        let items = matched
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect();

        SearchResults::new(items, pagination)
    }
}
