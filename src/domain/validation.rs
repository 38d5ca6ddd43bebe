use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use super::ProductCategory;

/// A required form field was missing or a value could not be accepted.
/// The action that produced it is refused and nothing changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
    #[error("Unit {unit:?} is not offered for {category}")]
    UnsupportedUnit {
        category: ProductCategory,
        unit: String,
    },
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Scan the merchant QR code first")]
    ScanRequired,
}

/// Rejects blank (whitespace-only) values.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Parses a strictly positive decimal from user text.
pub fn parse_positive(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim())
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}
