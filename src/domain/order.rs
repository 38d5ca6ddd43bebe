use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cart::cart_total;
use super::validation::{require, ValidationError};
use super::{CartEntry, CartEntryId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "COD")]
    Cod,
    #[serde(rename = "GCASH")]
    GCash,
    #[serde(rename = "MAYA")]
    Maya,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[PaymentMethod::Cod, PaymentMethod::GCash, PaymentMethod::Maya]
    }

    pub fn is_ewallet(self) -> bool {
        matches!(self, PaymentMethod::GCash | PaymentMethod::Maya)
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::GCash => "GCash",
            PaymentMethod::Maya => "Maya",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cod => write!(f, "COD"),
            PaymentMethod::GCash => write!(f, "GCASH"),
            PaymentMethod::Maya => write!(f, "MAYA"),
        }
    }
}

/// Who pays with an e-wallet: account holder name and number/mobile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EwalletAccount {
    pub name: String,
    pub number: String,
}

impl EwalletAccount {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Account name", &self.name)?;
        require("Account number", &self.number)
    }
}

/// Frozen snapshot of what is being bought, where it goes, and how it is
/// paid. The total is always derived from `entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub entries: Vec<CartEntry>,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub account: Option<EwalletAccount>,
}

impl OrderDraft {
    pub fn total(&self) -> Result<Decimal, ValidationError> {
        cart_total(&self.entries)
    }

    pub fn entry_ids(&self) -> Vec<CartEntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Short description used on delivery records, e.g. `Tomatoes (1 kg)`.
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} ({} {})", entry.product.name, entry.quantity, entry.unit))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
