//! Commerce error types.

use thiserror::Error;

use crate::ids::{CategoryId, ProductId};

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these surface from catalog construction and
/// lookups, and from loading documents.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Two catalog records share an id.
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    /// Discount outside 0..=100.
    #[error("Invalid discount of {discount}% on product {product_id}")]
    InvalidDiscount { product_id: ProductId, discount: u8 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Option not offered by the product (e.g., an unknown size).
    #[error("{option} '{value}' is not offered for {product}")]
    UnavailableOption {
        product: String,
        option: &'static str,
        value: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Storage error.
    #[error("Storage error: {0}")]
    StorageError(#[from] dhingra_cache::CacheError),
}
