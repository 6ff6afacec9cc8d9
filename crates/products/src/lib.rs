//! Products domain module.
//!
//! The product model (shared record + kind-specific payload), its display line, and the
//! boundary parsers that turn operator text into validated drafts. No IO, no terminal.

pub mod draft;
pub mod price;
pub mod product;
pub mod validation;

pub use draft::ProductDraft;
pub use price::Price;
pub use product::{DEFAULT_WARRANTY_MONTHS, EXPIRATION_FORMAT, Product, ProductKind};
pub use validation::{
    KindTag, parse_expiration, parse_id, parse_kind, parse_name, parse_price, parse_warranty,
};
