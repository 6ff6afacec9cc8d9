//! `faststock-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no terminal, no process, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ProductKey};
pub use id::{IdSequence, ProductId};
pub use value_object::ValueObject;
