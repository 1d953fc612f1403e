//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The inventory operations follow a "never fail, always log" policy, so these
/// variants only surface through the strict (`try_*` / `into_result`) APIs and
/// through identifier parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. blank warehouse id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No inventory entry exists for the named product.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A release asked for more than the warehouse held.
    #[error("insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(product: impl Into<String>) -> Self {
        Self::NotFound(product.into())
    }

    pub fn insufficient_stock(product: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            requested,
            available,
        }
    }
}
