use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DeliveryId, OrderDraft, PaymentMethod};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Paid => write!(f, "Paid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub price: Decimal,
    pub quantity: Decimal,
    pub unit: String,
}

impl OrderLine {
    pub fn total(&self) -> Option<Decimal> {
        self.price.checked_mul(self.quantity)
    }
}

/// Customer, payment and line details shown on a delivery's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub order_date: NaiveDate,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
}

impl OrderDetails {
    /// `None` when the lines do not fit in a decimal.
    pub fn total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.total()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: DeliveryId,
    pub product: String,
    pub status: String,
    pub location: String,
    pub eta: String,
    pub order_details: OrderDetails,
}

/// Payload for opening a delivery record.
#[derive(Debug, Clone)]
pub struct DeliveryCreate {
    pub product: String,
    pub status: String,
    pub location: String,
    pub eta: String,
    pub order_details: OrderDetails,
}

impl DeliveryCreate {
    /// Delivery for a checked-out draft, starting at the seller's farm.
    pub fn for_order(
        draft: &OrderDraft,
        customer_name: impl Into<String>,
        eta: impl Into<String>,
        payment_status: PaymentStatus,
        order_date: NaiveDate,
    ) -> Self {
        let lines = draft
            .entries
            .iter()
            .map(|entry| OrderLine {
                product_name: entry.product.name.clone(),
                price: entry.product.price.amount,
                quantity: entry.quantity,
                unit: entry.unit.clone(),
            })
            .collect();
        Self {
            product: draft.summary(),
            status: "Processing".to_string(),
            location: "Seller farm".to_string(),
            eta: eta.into(),
            order_details: OrderDetails {
                customer_name: customer_name.into(),
                lines,
                order_date,
                delivery_address: draft.address.clone(),
                payment_method: draft.payment_method,
                payment_status,
            },
        }
    }

    pub fn into_record(self, id: DeliveryId) -> DeliveryRecord {
        DeliveryRecord {
            id,
            product: self.product,
            status: self.status,
            location: self.location,
            eta: self.eta,
            order_details: self.order_details,
        }
    }
}
