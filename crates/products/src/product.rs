use chrono::NaiveDate;
use serde::Serialize;

use faststock_core::{Entity, ProductId};

use crate::price::Price;

/// Warranty assumed when none (or garbage) is supplied.
pub const DEFAULT_WARRANTY_MONTHS: u32 = 9;

/// `chrono` format of expiration dates, both for input and display (`20/12/2030`).
pub const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

mod date_format {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::EXPIRATION_FORMAT))
    }
}

/// Kind-specific payload of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Electronic {
        warranty_months: u32,
    },
    Food {
        #[serde(with = "date_format")]
        expiration: NaiveDate,
    },
}

/// One inventory record.
///
/// Identity, name and price are shared by every kind; the rest lives in [`ProductKind`].
/// Nothing is mutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, kind: ProductKind) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn electronic(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        warranty_months: u32,
    ) -> Self {
        Self::new(id, name, price, ProductKind::Electronic { warranty_months })
    }

    pub fn food(id: ProductId, name: impl Into<String>, price: Price, expiration: NaiveDate) -> Self {
        Self::new(id, name, price, ProductKind::Food { expiration })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn warranty_months(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Electronic { warranty_months } => Some(warranty_months),
            ProductKind::Food { .. } => None,
        }
    }

    pub fn expiration(&self) -> Option<NaiveDate> {
        match self.kind {
            ProductKind::Food { expiration } => Some(expiration),
            ProductKind::Electronic { .. } => None,
        }
    }

    /// Case-insensitive equality on the name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// The operator-facing line: `{id} | {name} | {price}` plus the kind's suffix.
impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} | {} | {}", self.id, self.name, self.price)?;
        match &self.kind {
            ProductKind::Electronic { warranty_months } => {
                write!(f, " | Warranty: {warranty_months} months")
            }
            ProductKind::Food { expiration } => {
                write!(f, " | Expiration: {}", expiration.format(EXPIRATION_FORMAT))
            }
        }
    }
}
