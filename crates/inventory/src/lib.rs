//! Inventory repository.
//!
//! Owns the ordered product collection and hands out ids. Pure in-memory logic: the
//! repository never talks to the terminal and never calls back into its caller.

pub mod repository;
pub mod search;
pub mod shared;

pub use repository::Inventory;
pub use search::SearchTerm;
pub use shared::SharedInventory;
