use tracing::{debug, info, instrument, warn};

use super::{
    CheckoutError, CheckoutForm, CheckoutStage, EwalletForm, HandoffPayload, OrderConfirmation,
    PaymentReceipt, QrPending,
};
use crate::domain::validation::require;
use crate::domain::{CartEntry, EwalletAccount, OrderDraft, PaymentMethod, SessionId, ValidationError};

/// Result of confirming the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Cash on delivery: the order to place.
    Cash(OrderDraft),
    /// E-wallet: the order was handed to the payment form.
    Ewallet(HandoffPayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayOutcome {
    /// Ready to charge and settle.
    Paid(PaymentReceipt),
    /// The session had already completed; nothing new was charged.
    AlreadyPaid(PaymentReceipt),
}

impl PayOutcome {
    pub fn receipt(&self) -> &PaymentReceipt {
        match self {
            PayOutcome::Paid(receipt) | PayOutcome::AlreadyPaid(receipt) => receipt,
        }
    }
}

/// One buyer's walk through checkout. Every transition either moves to the
/// next stage or fails and leaves the current stage untouched.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    id: SessionId,
    default_address: String,
    stage: CheckoutStage,
}

impl CheckoutSession {
    pub fn new(id: SessionId, default_address: impl Into<String>) -> Self {
        Self {
            id,
            default_address: default_address.into(),
            stage: CheckoutStage::Cart,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn stage(&self) -> &CheckoutStage {
        &self.stage
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        CheckoutError::InvalidTransition {
            stage: self.stage.name(),
            action,
        }
    }

    fn checkout_form_mut(&mut self, action: &'static str) -> Result<&mut CheckoutForm, CheckoutError> {
        let err = self.invalid(action);
        match &mut self.stage {
            CheckoutStage::CheckoutForm(form) => Ok(form),
            _ => Err(err),
        }
    }

    fn ewallet_form_mut(&mut self, action: &'static str) -> Result<&mut EwalletForm, CheckoutError> {
        let err = self.invalid(action);
        match &mut self.stage {
            CheckoutStage::EwalletForm(form) => Ok(form),
            _ => Err(err),
        }
    }

    /// Freezes `cart` into a checkout form with the default address filled in.
    #[instrument(skip(self, cart), fields(session = %self.id, entries = cart.len()))]
    pub fn open_checkout(&mut self, cart: Vec<CartEntry>) -> Result<(), CheckoutError> {
        if !matches!(self.stage, CheckoutStage::Cart) {
            return Err(self.invalid("open checkout"));
        }
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        self.stage = CheckoutStage::CheckoutForm(CheckoutForm::new(cart, &self.default_address));
        debug!("Checkout opened");
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        self.checkout_form_mut("cancel")?;
        self.stage = CheckoutStage::Cart;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), CheckoutError> {
        self.checkout_form_mut("edit the address")?.address = address.into();
        Ok(())
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        self.checkout_form_mut("choose a payment method")?.payment_method = method;
        Ok(())
    }

    /// Edits the payer account on whichever form is open.
    pub fn set_account(&mut self, account: EwalletAccount) -> Result<(), CheckoutError> {
        let err = self.invalid("edit the account");
        match &mut self.stage {
            CheckoutStage::CheckoutForm(form) => form.account = account,
            CheckoutStage::EwalletForm(form) => form.account = account,
            _ => return Err(err),
        }
        Ok(())
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) -> Result<(), CheckoutError> {
        self.ewallet_form_mut("edit the reference")?.reference = reference.into();
        Ok(())
    }

    /// Hands an e-wallet order to the payment form through its serialized
    /// payload. A cash order comes back as a draft to place; the form stays
    /// open until [`commit_confirmed`](Self::commit_confirmed) records that
    /// it was placed.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, CheckoutError> {
        let CheckoutStage::CheckoutForm(form) = &self.stage else {
            return Err(self.invalid("confirm"));
        };
        form.validate()?;
        let draft = form.draft();

        if draft.payment_method.is_ewallet() {
            let raw = HandoffPayload::from_draft(&draft)?.encode()?;
            let payload = HandoffPayload::decode(Some(&raw));
            info!(method = %draft.payment_method, total = %payload.total, "Handed off to e-wallet");
            self.stage = CheckoutStage::EwalletForm(EwalletForm::receive(payload.clone()));
            Ok(ConfirmOutcome::Ewallet(payload))
        } else {
            let total = draft.total()?;
            info!(total = %total, "Cash order ready to place");
            Ok(ConfirmOutcome::Cash(draft))
        }
    }

    /// Marks the cash order from [`confirm`](Self::confirm) as placed.
    pub fn commit_confirmed(&mut self, draft: OrderDraft) -> Result<(), CheckoutError> {
        self.checkout_form_mut("place the order")?;
        self.stage = CheckoutStage::Confirmed(OrderConfirmation { draft });
        debug!("Order placed");
        Ok(())
    }

    /// Leaves for the QR scanner, carrying the current account fields.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn scan(&mut self) -> Result<(), CheckoutError> {
        let raw = self.ewallet_form_mut("scan")?.handoff().encode()?;
        self.stage = CheckoutStage::QrPending(QrPending { raw });
        Ok(())
    }

    /// Returns from the scanner with `token`.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn complete_scan(&mut self, token: &str) -> Result<(), CheckoutError> {
        let CheckoutStage::QrPending(pending) = &self.stage else {
            return Err(self.invalid("complete the scan"));
        };
        require("Scan result", token)?;
        let payload = HandoffPayload::decode(Some(&pending.raw)).with_scan(Some(token.to_string()));
        self.stage = CheckoutStage::EwalletForm(EwalletForm::receive(payload));
        debug!("Scan recorded");
        Ok(())
    }

    /// Returns from the scanner without a result.
    pub fn cancel_scan(&mut self) -> Result<(), CheckoutError> {
        let CheckoutStage::QrPending(pending) = &self.stage else {
            return Err(self.invalid("cancel the scan"));
        };
        let payload = HandoffPayload::decode(Some(&pending.raw));
        self.stage = CheckoutStage::EwalletForm(EwalletForm::receive(payload));
        Ok(())
    }

    /// Builds the receipt for the e-wallet payment. The form stays open
    /// until [`commit_paid`](Self::commit_paid) records that the charge
    /// went through. Calling it on a completed session returns the stored
    /// receipt.
    #[instrument(skip(self), fields(session = %self.id))]
    pub fn pay(&self) -> Result<PayOutcome, CheckoutError> {
        let form = match &self.stage {
            CheckoutStage::PaymentComplete(receipt) => {
                warn!("Payment already completed; returning the existing receipt");
                return Ok(PayOutcome::AlreadyPaid(receipt.clone()));
            }
            CheckoutStage::EwalletForm(form) => form,
            _ => return Err(self.invalid("pay")),
        };
        form.account.validate()?;
        let scan_token = form
            .scanned()
            .ok_or(ValidationError::ScanRequired)?
            .to_string();
        let draft = form.draft();
        if draft.entries.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        let reference = Some(form.reference.trim().to_string()).filter(|r| !r.is_empty());
        let receipt = PaymentReceipt {
            session: self.id,
            amount: form.total(),
            draft,
            scan_token,
            reference,
        };
        info!(amount = %receipt.amount, method = %receipt.draft.payment_method, "Payment ready");
        Ok(PayOutcome::Paid(receipt))
    }

    /// Moves to `PaymentComplete` with the receipt from [`pay`](Self::pay).
    pub fn commit_paid(&mut self, receipt: PaymentReceipt) -> Result<(), CheckoutError> {
        self.ewallet_form_mut("complete the payment")?;
        self.stage = CheckoutStage::PaymentComplete(receipt);
        debug!("Payment completed");
        Ok(())
    }

    /// Closes a terminal stage and returns to the cart.
    pub fn finish(&mut self) -> Result<(), CheckoutError> {
        if !self.stage.is_terminal() {
            return Err(self.invalid("finish"));
        }
        self.stage = CheckoutStage::Cart;
        Ok(())
    }
}
