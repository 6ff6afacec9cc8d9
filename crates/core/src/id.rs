//! Strongly-typed product identifiers and their allocator.

use core::str::FromStr;
use serde::Serialize;

use crate::error::DomainError;

/// Identifier of a product, unique within one inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_input(format!("ProductId '{}': {e}", s.trim())))?;
        if raw == 0 {
            return Err(DomainError::invalid_input("ProductId must be at least 1"));
        }
        Ok(Self(raw))
    }
}

/// Monotonic id allocator.
///
/// Starts at 1 and advances on every call to [`IdSequence::next_id`], whether or not the
/// id ends up stored. Ids are never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ProductId {
        let id = ProductId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call will return, without consuming it.
    pub fn peek(&self) -> ProductId {
        ProductId(self.next)
    }
}
