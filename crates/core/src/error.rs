//! Inventory error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Validation and lookup failures raised by the inventory store.
///
/// Storage faults are not represented here: the store logs and absorbs them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// Another product already uses this id.
    #[error("a product with id '{0}' already exists")]
    DuplicateId(ProductId),

    /// Another product already uses this name (case-insensitive).
    #[error("a product named '{0}' already exists in the inventory")]
    DuplicateName(String),

    /// The product name is empty or whitespace-only.
    #[error("product name cannot be empty")]
    InvalidName,

    #[error("price cannot be negative (got {0})")]
    InvalidPrice(f64),

    #[error("stock cannot be negative (got {0})")]
    InvalidStock(i64),

    /// No product matches the requested id.
    #[error("product '{0}' not found")]
    ProductNotFound(ProductId),
}

impl InventoryError {
    /// Short machine-readable code for API responses and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateId(_) => "duplicate_id",
            Self::DuplicateName(_) => "duplicate_name",
            Self::InvalidName => "invalid_name",
            Self::InvalidPrice(_) => "invalid_price",
            Self::InvalidStock(_) => "invalid_stock",
            Self::ProductNotFound(_) => "not_found",
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateId(_) | Self::DuplicateName(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName | Self::InvalidPrice(_) | Self::InvalidStock(_)
        )
    }
}
