//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Key a lookup or removal was attempted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Id(ProductId),
    Name(String),
}

impl core::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "with id {id}"),
            ProductKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Domain-level error.
///
/// Both variants are recoverable: the operator sees a message and the inventory stays
/// usable after any failed operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A lookup or removal target is absent.
    #[error("product {0} was not found in the inventory")]
    ProductNotFound(ProductKey),

    /// A value supplied at the boundary was malformed (price, id, date, kind, name).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn not_found_id(id: ProductId) -> Self {
        Self::ProductNotFound(ProductKey::Id(id))
    }

    pub fn not_found_name(name: impl Into<String>) -> Self {
        Self::ProductNotFound(ProductKey::Name(name.into()))
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error reports a missing product.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound(_))
    }
}
