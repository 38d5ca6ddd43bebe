use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::CheckoutError;
use crate::domain::{
    cart_total, CartEntry, CartSelection, EwalletAccount, OrderDraft, PaymentMethod,
    ValidationError,
};

/// What travels between checkout stages. Serialized as camelCase JSON:
/// `cart`, `total`, `address`, `paymentMethod`, and once known `accountName`,
/// `accountNumber`, `scanned`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    #[serde(default)]
    pub cart: Vec<CartEntry>,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned: Option<String>,
}

impl HandoffPayload {
    pub fn from_draft(draft: &OrderDraft) -> Result<Self, ValidationError> {
        let mut total = draft.total()?;
        total.rescale(2);
        Ok(Self {
            cart: draft.entries.clone(),
            total,
            address: draft.address.clone(),
            payment_method: Some(draft.payment_method),
            account_name: draft.account.as_ref().map(|account| account.name.clone()),
            account_number: draft.account.as_ref().map(|account| account.number.clone()),
            scanned: None,
        })
    }

    pub fn with_account(mut self, account: &EwalletAccount) -> Self {
        self.account_name = Some(account.name.clone());
        self.account_number = Some(account.number.clone());
        self
    }

    pub fn with_scan(mut self, token: Option<String>) -> Self {
        self.scanned = token;
        self
    }

    pub fn recomputed_total(&self) -> Result<Decimal, ValidationError> {
        cart_total(&self.cart)
    }

    pub fn account(&self) -> EwalletAccount {
        EwalletAccount {
            name: self.account_name.clone().unwrap_or_default(),
            number: self.account_number.clone().unwrap_or_default(),
        }
    }

    /// The draft this payload describes. A payload without a method is an
    /// e-wallet handoff, so `fallback` fills the gap.
    pub fn to_draft(&self, fallback: PaymentMethod) -> OrderDraft {
        let method = self.payment_method.unwrap_or(fallback);
        OrderDraft {
            entries: self.cart.clone(),
            address: self.address.clone(),
            payment_method: method,
            account: method.is_ewallet().then(|| self.account()),
        }
    }

    pub fn encode(&self) -> Result<String, CheckoutError> {
        serde_json::to_string(self).map_err(malformed)
    }

    /// Strict parse. Every cart line must hold a positive quantity and a
    /// unit, as it would when added to the cart. The carried total is
    /// replaced by the one recomputed from `cart`, with a warning when they
    /// disagree.
    pub fn try_decode(raw: &str) -> Result<Self, CheckoutError> {
        let mut payload: Self = serde_json::from_str(raw).map_err(malformed)?;
        for entry in &payload.cart {
            CartSelection::new(entry.quantity, &entry.unit).map_err(malformed)?;
        }
        let recomputed = payload.recomputed_total().map_err(malformed)?;
        if payload.total != recomputed {
            warn!(
                carried = %payload.total,
                recomputed = %recomputed,
                "Handoff total disagrees with its cart; using recomputed total"
            );
        }
        payload.total = recomputed;
        payload.total.rescale(2);
        Ok(payload)
    }

    /// Lenient parse for stage boundaries: a missing or malformed payload
    /// becomes an empty cart with a zero total.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            warn!("Handoff payload missing; starting from an empty cart");
            return Self::default();
        };
        match Self::try_decode(raw) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Handoff payload unreadable; starting from an empty cart");
                Self::default()
            }
        }
    }
}

fn malformed(e: impl fmt::Display) -> CheckoutError {
    CheckoutError::MalformedPayload(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::seed_catalog;
    use crate::domain::CartEntryId;

    fn draft() -> OrderDraft {
        let catalog = seed_catalog();
        OrderDraft {
            entries: vec![
                CartEntry {
                    id: CartEntryId::new(10),
                    product: catalog[0].clone(),
                    quantity: Decimal::new(15, 1),
                    unit: "kg".into(),
                },
                CartEntry {
                    id: CartEntryId::new(11),
                    product: catalog[5].clone(),
                    quantity: Decimal::from(3),
                    unit: "head".into(),
                },
            ],
            address: "Lapasan, CDOC".into(),
            payment_method: PaymentMethod::GCash,
            account: Some(EwalletAccount::new("Juan", "09171234567")),
        }
    }

    #[test]
    fn decoded_draft_has_the_same_total() {
        let original = draft();
        let raw = HandoffPayload::from_draft(&original).unwrap().encode().unwrap();
        let decoded = HandoffPayload::try_decode(&raw).unwrap();
        let rebuilt = decoded.to_draft(PaymentMethod::GCash);
        assert_eq!(rebuilt.total(), original.total());
        assert_eq!(decoded.total, Decimal::from(975));
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let raw = HandoffPayload::from_draft(&draft()).unwrap().encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["paymentMethod"], "GCASH");
        assert_eq!(value["accountName"], "Juan");
        assert_eq!(value["accountNumber"], "09171234567");
        assert_eq!(value["total"], "975.00");
        assert!(value.get("scanned").is_none());
    }

    #[test]
    fn stale_total_is_replaced_by_recomputed() {
        let mut payload = HandoffPayload::from_draft(&draft()).unwrap();
        payload.total = Decimal::from(1);
        let raw = payload.encode().unwrap();
        assert_eq!(HandoffPayload::try_decode(&raw).unwrap().total, Decimal::from(975));
    }

    #[test]
    fn malformed_payload_degrades_to_empty() {
        let decoded = HandoffPayload::decode(Some("{\"cart\": \"not a list\""));
        assert!(decoded.cart.is_empty());
        assert_eq!(decoded.total, Decimal::ZERO);
        assert!(matches!(
            HandoffPayload::try_decode("nope"),
            Err(CheckoutError::MalformedPayload(_))
        ));
    }

    #[test]
    fn invalid_cart_lines_degrade_to_empty() {
        let mut payload = HandoffPayload::from_draft(&draft()).unwrap();
        payload.cart[0].quantity = Decimal::from(-3);
        payload.cart[0].unit = String::new();
        let raw = payload.encode().unwrap();
        assert!(matches!(
            HandoffPayload::try_decode(&raw),
            Err(CheckoutError::MalformedPayload(_))
        ));
        let decoded = HandoffPayload::decode(Some(&raw));
        assert!(decoded.cart.is_empty());
        assert_eq!(decoded.total, Decimal::ZERO);

        let mut payload = HandoffPayload::from_draft(&draft()).unwrap();
        payload.cart[1].unit = "  ".into();
        let raw = payload.encode().unwrap();
        assert_eq!(HandoffPayload::decode(Some(&raw)), HandoffPayload::default());
    }

    #[test]
    fn overflowing_cart_is_malformed() {
        let mut payload = HandoffPayload::from_draft(&draft()).unwrap();
        payload.cart[0].quantity = Decimal::MAX;
        let raw = payload.encode().unwrap();
        assert!(matches!(
            HandoffPayload::try_decode(&raw),
            Err(CheckoutError::MalformedPayload(_))
        ));
    }

    #[test]
    fn missing_payload_degrades_to_empty() {
        assert_eq!(HandoffPayload::decode(None), HandoffPayload::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let decoded = HandoffPayload::decode(Some("{\"address\": \"Bulua\"}"));
        assert_eq!(decoded.address, "Bulua");
        assert!(decoded.cart.is_empty());
        assert_eq!(decoded.to_draft(PaymentMethod::GCash).payment_method, PaymentMethod::GCash);
        assert_eq!(decoded.account(), EwalletAccount::default());
    }
}
