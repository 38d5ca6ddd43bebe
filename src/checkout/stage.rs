use rust_decimal::Decimal;

use super::HandoffPayload;
use crate::domain::validation::require;
use crate::domain::{
    cart_total, CartEntry, EwalletAccount, OrderDraft, PaymentMethod, SessionId, ValidationError,
};

/// Editable checkout form over a frozen copy of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    entries: Vec<CartEntry>,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub account: EwalletAccount,
}

impl CheckoutForm {
    pub(crate) fn new(entries: Vec<CartEntry>, default_address: &str) -> Self {
        Self {
            entries,
            address: default_address.to_string(),
            payment_method: PaymentMethod::default(),
            account: EwalletAccount::default(),
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn total(&self) -> Result<Decimal, ValidationError> {
        cart_total(&self.entries)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        require("Delivery address", &self.address)?;
        if self.payment_method.is_ewallet() {
            self.account.validate()?;
        }
        self.total().map(|_| ())
    }

    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            entries: self.entries.clone(),
            address: self.address.clone(),
            payment_method: self.payment_method,
            account: self
                .payment_method
                .is_ewallet()
                .then(|| self.account.clone()),
        }
    }
}

/// A cash-on-delivery order that has been placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub draft: OrderDraft,
}

/// E-wallet payment form. The order it pays for is frozen; only the account
/// fields and the scan result change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EwalletForm {
    order: HandoffPayload,
    pub account: EwalletAccount,
    pub reference: String,
    scanned: Option<String>,
}

impl EwalletForm {
    pub(crate) fn receive(order: HandoffPayload) -> Self {
        let account = order.account();
        let scanned = order.scanned.clone();
        Self {
            order,
            account,
            reference: String::new(),
            scanned,
        }
    }

    pub fn total(&self) -> Decimal {
        self.order.total
    }

    pub fn scanned(&self) -> Option<&str> {
        self.scanned.as_deref()
    }

    pub fn draft(&self) -> OrderDraft {
        let mut draft = self.order.to_draft(PaymentMethod::GCash);
        draft.account = Some(self.account.clone());
        draft
    }

    /// The payload handed to the next stage, carrying the current field values.
    pub(crate) fn handoff(&self) -> HandoffPayload {
        self.order
            .clone()
            .with_account(&self.account)
            .with_scan(self.scanned.clone())
    }
}

/// Waiting for the merchant QR code to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPending {
    pub(crate) raw: String,
}

/// Proof of a completed e-wallet payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub session: SessionId,
    pub draft: OrderDraft,
    pub amount: Decimal,
    pub scan_token: String,
    pub reference: Option<String>,
}

impl PaymentReceipt {
    pub fn account(&self) -> EwalletAccount {
        self.draft.account.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStage {
    Cart,
    CheckoutForm(CheckoutForm),
    Confirmed(OrderConfirmation),
    EwalletForm(EwalletForm),
    QrPending(QrPending),
    PaymentComplete(PaymentReceipt),
}

impl CheckoutStage {
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutStage::Cart => "cart",
            CheckoutStage::CheckoutForm(_) => "checkout form",
            CheckoutStage::Confirmed(_) => "order confirmed",
            CheckoutStage::EwalletForm(_) => "e-wallet form",
            CheckoutStage::QrPending(_) => "QR scan",
            CheckoutStage::PaymentComplete(_) => "payment complete",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckoutStage::Confirmed(_) | CheckoutStage::PaymentComplete(_)
        )
    }
}
