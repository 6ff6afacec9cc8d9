use faststock_core::Entity;
use faststock_products::Product;

/// How a search term is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    /// The term parsed as an integer: match on id.
    Id(i64),
    /// Anything else: case-insensitive substring of the name, whitespace included.
    Name(String),
}

impl SearchTerm {
    /// Surrounding whitespace is ignored only when deciding whether the term is an id.
    pub fn parse(term: &str) -> Self {
        match term.trim().parse::<i64>() {
            Ok(n) => SearchTerm::Id(n),
            Err(_) => SearchTerm::Name(term.to_string()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SearchTerm::Id(n) => i64::try_from(product.id().get()).is_ok_and(|id| id == *n),
            SearchTerm::Name(fragment) => product.name_contains(fragment),
        }
    }
}
