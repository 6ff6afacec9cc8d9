use std::sync::{Mutex, MutexGuard, PoisonError};

use faststock_core::{DomainResult, ProductId};
use faststock_products::{Product, ProductDraft};

use crate::repository::Inventory;

/// Inventory behind a single lock, for more than one caller.
///
/// Each method holds the lock for the whole operation, so no caller observes a half
/// applied change. Results are cloned out since nothing may alias the stored products.
#[derive(Debug, Default)]
pub struct SharedInventory {
    inner: Mutex<Inventory>,
}

impl SharedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation completes or leaves the inventory untouched, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn next_id(&self) -> ProductId {
        self.lock().next_id()
    }

    pub fn add(&self, product: Product) {
        self.lock().add(product);
    }

    pub fn register(&self, draft: ProductDraft) -> Product {
        self.lock().register(draft).clone()
    }

    pub fn remove_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.lock().remove_by_id(id)
    }

    pub fn remove_by_name(&self, name: &str) -> DomainResult<Product> {
        self.lock().remove_by_name(name)
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.lock().get_by_id(id).cloned()
    }

    pub fn get_by_name(&self, name: &str) -> DomainResult<Product> {
        self.lock().get_by_name(name).cloned()
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.lock().list_all().to_vec()
    }

    pub fn search(&self, term: &str) -> Vec<Product> {
        self.lock().search(term).into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> Inventory {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Inventory> for SharedInventory {
    fn from(inventory: Inventory) -> Self {
        Self {
            inner: Mutex::new(inventory),
        }
    }
}
