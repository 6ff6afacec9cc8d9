use faststock_core::{DomainError, DomainResult, Entity, IdSequence, ProductId};
use faststock_products::{Product, ProductDraft};

use crate::search::SearchTerm;

/// In-memory inventory.
///
/// Products keep their insertion order; removal never reorders the rest. Ids come from an
/// internal sequence and are never reused, even after the product is gone.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
    ids: IdSequence,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh id. Advances the sequence whether or not the id is used.
    pub fn next_id(&mut self) -> ProductId {
        let id = self.ids.next_id();
        tracing::debug!(product_id = %id, "assigned product id");
        id
    }

    /// Append a product. No uniqueness check: ids are expected to come from [`Self::next_id`].
    pub fn add(&mut self, product: Product) {
        tracing::info!(product_id = %product.id_typed(), name = product.name(), "product added");
        self.products.push(product);
    }

    /// Assign an id to a validated draft and store it.
    pub fn register(&mut self, draft: ProductDraft) -> &Product {
        let id = self.next_id();
        let index = self.products.len();
        self.add(draft.into_product(id));
        &self.products[index]
    }

    pub fn remove_by_id(&mut self, id: ProductId) -> DomainResult<Product> {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                let removed = self.products.remove(index);
                tracing::info!(product_id = %id, name = removed.name(), "product removed");
                Ok(removed)
            }
            None => {
                tracing::warn!(product_id = %id, "remove failed: no such id");
                Err(DomainError::not_found_id(id))
            }
        }
    }

    /// Removes the first product whose name equals `name`, ignoring case.
    pub fn remove_by_name(&mut self, name: &str) -> DomainResult<Product> {
        match self.products.iter().position(|p| p.name_matches(name)) {
            Some(index) => {
                let removed = self.products.remove(index);
                tracing::info!(product_id = %removed.id_typed(), name, "product removed");
                Ok(removed)
            }
            None => {
                tracing::warn!(name, "remove failed: no such name");
                Err(DomainError::not_found_name(name))
            }
        }
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found_id(id))
    }

    pub fn get_by_name(&self, name: &str) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.name_matches(name))
            .ok_or_else(|| DomainError::not_found_name(name))
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Integer terms match ids, anything else is a case-insensitive name substring.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let parsed = SearchTerm::parse(term);
        let found: Vec<&Product> = self.products.iter().filter(|p| parsed.matches(p)).collect();
        tracing::debug!(term, matches = found.len(), "search");
        found
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::str::FromStr;
    use faststock_core::ProductKey;
    use faststock_products::{Price, ProductKind};
    use rust_decimal::Decimal;

    fn price(s: &str) -> Price {
        Price::new(Decimal::from_str(s).unwrap())
    }

    fn electronic(inv: &mut Inventory, name: &str) -> ProductId {
        let id = inv.next_id();
        inv.add(Product::electronic(id, name, price("10"), 9));
        id
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id_typed().get()).collect()
    }

    #[test]
    fn next_id_starts_at_one_and_ignores_usage() {
        let mut inv = Inventory::new();
        assert_eq!(inv.next_id(), ProductId::new(1));
        assert_eq!(inv.next_id(), ProductId::new(2));
        assert!(inv.is_empty());
        assert_eq!(electronic(&mut inv, "Laptop"), ProductId::new(3));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut inv = Inventory::new();
        let a = electronic(&mut inv, "A");
        let b = electronic(&mut inv, "B");
        inv.remove_by_id(b).unwrap();
        inv.remove_by_id(a).unwrap();
        assert_eq!(electronic(&mut inv, "C"), ProductId::new(3));
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let mut inv = Inventory::new();
        for name in ["Radio", "Camera", "Drone", "Amp"] {
            electronic(&mut inv, name);
        }
        let names: Vec<&str> = inv.list_all().iter().map(Product::name).collect();
        assert_eq!(names, ["Radio", "Camera", "Drone", "Amp"]);
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let mut inv = Inventory::new();
        for name in ["A", "B", "C", "D"] {
            electronic(&mut inv, name);
        }
        inv.remove_by_name("b").unwrap();
        let names: Vec<&str> = inv.list_all().iter().map(Product::name).collect();
        assert_eq!(names, ["A", "C", "D"]);
    }

    #[test]
    fn removed_product_is_no_longer_found() {
        let mut inv = Inventory::new();
        let id = electronic(&mut inv, "Laptop");
        let removed = inv.remove_by_id(id).unwrap();
        assert_eq!(removed.name(), "Laptop");
        assert_eq!(inv.get_by_id(id).unwrap_err(), DomainError::not_found_id(id));
    }

    #[test]
    fn removing_unknown_id_fails_and_changes_nothing() {
        let mut inv = Inventory::new();
        let err = inv.remove_by_id(ProductId::new(999)).unwrap_err();
        assert_eq!(err, DomainError::ProductNotFound(ProductKey::Id(ProductId::new(999))));
        assert!(inv.list_all().is_empty());

        electronic(&mut inv, "Laptop");
        let before = inv.list_all().to_vec();
        assert!(inv.remove_by_id(ProductId::new(999)).is_err());
        assert_eq!(inv.list_all(), before.as_slice());
    }

    #[test]
    fn removing_unknown_name_fails_with_that_name() {
        let mut inv = Inventory::new();
        electronic(&mut inv, "Laptop");
        let err = inv.remove_by_name("Tablet").unwrap_err();
        assert_eq!(err, DomainError::not_found_name("Tablet"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_by_name_takes_only_the_first_match() {
        let mut inv = Inventory::new();
        let first = electronic(&mut inv, "Cable");
        let second = electronic(&mut inv, "CABLE");
        let removed = inv.remove_by_name("cable").unwrap();
        assert_eq!(removed.id_typed(), first);
        assert_eq!(inv.get_by_name("Cable").unwrap().id_typed(), second);
    }

    #[test]
    fn get_by_name_ignores_case() {
        let mut inv = Inventory::new();
        let id = electronic(&mut inv, "Laptop");
        assert_eq!(inv.get_by_name("lApToP").unwrap().id_typed(), id);
        assert!(inv.get_by_name("Lap").unwrap_err().is_not_found());
    }

    #[test]
    fn search_integer_term_matches_id() {
        let mut inv = Inventory::new();
        electronic(&mut inv, "Laptop");
        electronic(&mut inv, "Phone");
        electronic(&mut inv, "Phone 2");
        assert_eq!(ids(&inv.search("2")), vec![2]);
        assert!(inv.search("42").is_empty());
        assert!(inv.search("-1").is_empty());
    }

    #[test]
    fn search_text_term_matches_name_substring() {
        let mut inv = Inventory::new();
        electronic(&mut inv, "Smartphone");
        electronic(&mut inv, "Laptop");
        electronic(&mut inv, "PHONE case");
        assert_eq!(ids(&inv.search("phone")), vec![1, 3]);
        assert!(inv.search("tablet").is_empty());
    }

    #[test]
    fn search_keeps_surrounding_whitespace_in_name_terms() {
        let mut inv = Inventory::new();
        electronic(&mut inv, "Smartphone");
        electronic(&mut inv, "Phone Case");
        electronic(&mut inv, "Laptop");
        assert_eq!(ids(&inv.search("phone ")), vec![2]);
        assert_eq!(ids(&inv.search(" ")), vec![2]);
        assert_eq!(ids(&inv.search(" 3 ")), vec![3]);
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let mut inv = Inventory::new();
        electronic(&mut inv, "A");
        electronic(&mut inv, "B");
        assert_eq!(inv.search("").len(), 2);
    }

    #[test]
    fn register_assigns_id_and_returns_stored_product() {
        let mut inv = Inventory::new();
        let draft = ProductDraft::electronic("Laptop", "999.90", "12").unwrap();
        let stored = inv.register(draft).clone();
        assert_eq!(stored.id_typed(), ProductId::new(1));
        assert_eq!(inv.get_by_id(ProductId::new(1)).unwrap(), &stored);
    }

    /// Laptop + Milk, then remove milk by name.
    #[test]
    fn laptop_and_milk_scenario() {
        let mut inv = Inventory::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let laptop = inv
            .register(ProductDraft::electronic("Laptop", "999.90", "12").unwrap())
            .id_typed();
        let milk = inv
            .register(ProductDraft::food("Milk", "4.50", "20/12/2030", today).unwrap())
            .id_typed();
        assert_eq!(laptop, ProductId::new(1));
        assert_eq!(milk, ProductId::new(2));

        let lines: Vec<String> = inv.list_all().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "1 | Laptop | 999.90 | Warranty: 12 months",
                "2 | Milk | 4.50 | Expiration: 20/12/2030",
            ]
        );

        let removed = inv.remove_by_name("milk").unwrap();
        assert_eq!(removed.id_typed(), milk);
        assert!(matches!(removed.kind(), ProductKind::Food { .. }));
        assert_eq!(inv.list_all().len(), 1);
        assert_eq!(inv.list_all()[0].name(), "Laptop");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            RemoveOldest,
            RemoveNewest,
            Burn,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => Just(Op::Add),
                1 => Just(Op::RemoveOldest),
                1 => Just(Op::RemoveNewest),
                1 => Just(Op::Burn),
            ]
        }

        proptest! {
            /// Property: ids strictly increase from 1 regardless of removals.
            #[test]
            fn ids_strictly_increase_across_removals(ops in prop::collection::vec(op(), 1..200)) {
                let mut inv = Inventory::new();
                let mut issued: Vec<u64> = Vec::new();
                for op in ops {
                    match op {
                        Op::Add => issued.push(electronic(&mut inv, "item").get()),
                        Op::Burn => issued.push(inv.next_id().get()),
                        Op::RemoveOldest => {
                            if let Some(id) = inv.list_all().first().map(Product::id_typed) {
                                inv.remove_by_id(id).unwrap();
                            }
                        }
                        Op::RemoveNewest => {
                            if let Some(id) = inv.list_all().last().map(Product::id_typed) {
                                inv.remove_by_id(id).unwrap();
                            }
                        }
                    }
                }
                let expected: Vec<u64> = (1..=issued.len() as u64).collect();
                prop_assert_eq!(issued, expected);
            }

            /// Property: name search ignores case.
            #[test]
            fn name_search_is_case_insensitive(name in "[A-Za-z]{1,12}", start in 0usize..12, len in 1usize..12) {
                let mut inv = Inventory::new();
                electronic(&mut inv, &name);
                let start = start.min(name.len() - 1);
                let end = (start + len).min(name.len());
                let fragment = &name[start..end];
                prop_assert_eq!(inv.search(&fragment.to_uppercase()).len(), 1);
                prop_assert_eq!(inv.search(&fragment.to_lowercase()).len(), 1);
            }
        }
    }
}
