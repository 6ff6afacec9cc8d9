use chrono::NaiveDate;

use faststock_core::{DomainResult, ProductId};

use crate::price::Price;
use crate::product::{Product, ProductKind};
use crate::validation::{parse_expiration, parse_name, parse_price, parse_warranty};

/// A validated product that has not been given an id yet.
///
/// The inventory assigns the id when the draft is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub kind: ProductKind,
}

impl ProductDraft {
    /// Parse raw electronic fields. Bad warranty text falls back to the default.
    pub fn electronic(name: &str, price: &str, warranty: &str) -> DomainResult<Self> {
        Ok(Self {
            name: parse_name(name)?,
            price: parse_price(price)?,
            kind: ProductKind::Electronic {
                warranty_months: parse_warranty(warranty),
            },
        })
    }

    /// Parse raw food fields; the expiration must fall after `today`.
    pub fn food(name: &str, price: &str, expiration: &str, today: NaiveDate) -> DomainResult<Self> {
        Ok(Self {
            name: parse_name(name)?,
            price: parse_price(price)?,
            kind: ProductKind::Food {
                expiration: parse_expiration(expiration, today)?,
            },
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.name, self.price, self.kind)
    }
}
