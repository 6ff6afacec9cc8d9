//! Boundary parsers.
//!
//! Everything the operator types goes through one of these before the inventory sees it.
//! The model types stay unchecked; this is where `InvalidInput` comes from.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use faststock_core::{DomainError, DomainResult, ProductId};

use crate::price::Price;
use crate::product::{DEFAULT_WARRANTY_MONTHS, EXPIRATION_FORMAT};

/// Product kind as chosen by the operator, before its payload is collected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KindTag {
    Electronic,
    Food,
}

impl FromStr for KindTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electronic" => Ok(KindTag::Electronic),
            "food" => Ok(KindTag::Food),
            other => Err(DomainError::invalid_input(format!(
                "unknown product kind '{other}' (expected electronic or food)"
            ))),
        }
    }
}

pub fn parse_kind(input: &str) -> DomainResult<KindTag> {
    input.parse()
}

pub fn parse_name(input: &str) -> DomainResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(DomainError::invalid_input("name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Decimal literal, strictly greater than zero.
pub fn parse_price(input: &str) -> DomainResult<Price> {
    let raw = input.trim();
    // `Decimal` accepts `_` digit separators; operators never mean them.
    if raw.contains('_') {
        return Err(DomainError::invalid_input(format!("price '{raw}' is not a number")));
    }
    let amount = Decimal::from_str(raw)
        .map_err(|_| DomainError::invalid_input(format!("price '{raw}' is not a number")))?;
    let price = Price::new(amount);
    if !price.is_positive() {
        return Err(DomainError::invalid_input("price must be greater than zero"));
    }
    Ok(price)
}

/// Whole months; falls back to [`DEFAULT_WARRANTY_MONTHS`] on anything unparsable.
pub fn parse_warranty(input: &str) -> u32 {
    input.trim().parse().unwrap_or(DEFAULT_WARRANTY_MONTHS)
}

/// `dd/mm/yyyy`, strictly after `today`.
pub fn parse_expiration(input: &str, today: NaiveDate) -> DomainResult<NaiveDate> {
    let raw = input.trim();
    let date = NaiveDate::parse_from_str(raw, EXPIRATION_FORMAT).map_err(|_| {
        DomainError::invalid_input(format!("expiration '{raw}' is not a dd/mm/yyyy date"))
    })?;
    if date <= today {
        return Err(DomainError::invalid_input(format!(
            "expiration {raw} must be in the future"
        )));
    }
    Ok(date)
}

pub fn parse_id(input: &str) -> DomainResult<ProductId> {
    input.parse()
}
