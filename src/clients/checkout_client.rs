use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::checkout::{
    CheckoutError, CheckoutSession, ConfirmOutcome, HandoffPayload, PayOutcome, PaymentReceipt,
};
use crate::clients::{CartClient, DeliveryClient, PaymentClient};
use crate::config::MarketConfig;
use crate::domain::{
    DeliveryCreate, DeliveryRecord, IdGenerator, OrderDraft, PaymentCreate, PaymentRecord,
    PaymentStatus, SessionId,
};

/// Settings the checkout flow reads from configuration.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    pub default_address: String,
    pub buyer_name: String,
    pub delivery_eta: String,
}

impl From<&MarketConfig> for CheckoutSettings {
    fn from(config: &MarketConfig) -> Self {
        Self {
            default_address: config.default_address.clone(),
            buyer_name: config.buyer_name.clone(),
            delivery_eta: config.delivery_eta.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Cash on delivery: the order is tracked and its lines left the cart.
    OrderPlaced {
        draft: OrderDraft,
        delivery: DeliveryRecord,
        cleared: usize,
    },
    /// E-wallet: the session now waits on the payment form.
    AwaitingPayment(HandoffPayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub receipt: PaymentReceipt,
    pub payment: PaymentRecord,
    /// Only set on the call that completed the payment.
    pub delivery: Option<DeliveryRecord>,
}

/// Drives checkout sessions and applies their effects to the stores.
///
/// The session decides whether a step is allowed; this client then opens
/// the delivery, records the payment and removes the ordered lines from the
/// cart. Lines added to the cart after checkout opened are left alone.
#[derive(Clone)]
pub struct CheckoutClient {
    cart_client: CartClient,
    delivery_client: DeliveryClient,
    payment_client: PaymentClient,
    settings: CheckoutSettings,
    session_ids: Arc<IdGenerator>,
}

impl CheckoutClient {
    pub fn new(
        cart_client: CartClient,
        delivery_client: DeliveryClient,
        payment_client: PaymentClient,
        settings: CheckoutSettings,
    ) -> Self {
        Self {
            cart_client,
            delivery_client,
            payment_client,
            settings,
            session_ids: Arc::new(IdGenerator::starting_after(0)),
        }
    }

    pub fn start_session(&self) -> CheckoutSession {
        let id = SessionId::new(self.session_ids.next_id());
        CheckoutSession::new(id, self.settings.default_address.clone())
    }

    /// Snapshots the current cart into the session's checkout form.
    #[instrument(skip(self, session), fields(session = %session.id()))]
    pub async fn open_checkout(&self, session: &mut CheckoutSession) -> Result<(), CheckoutError> {
        let cart = self.cart_client.list_cart().await?;
        info!(entries = cart.len(), "Opening checkout");
        session.open_checkout(cart)
    }

    #[instrument(skip(self, session), fields(session = %session.id()))]
    pub async fn confirm(&self, session: &mut CheckoutSession) -> Result<CheckoutOutcome, CheckoutError> {
        match session.confirm()? {
            ConfirmOutcome::Cash(draft) => {
                let customer = self.settings.buyer_name.clone();
                let (delivery, cleared) = self
                    .place_order(&draft, customer, PaymentStatus::Pending)
                    .await?;
                session.commit_confirmed(draft.clone())?;
                Ok(CheckoutOutcome::OrderPlaced {
                    draft,
                    delivery,
                    cleared,
                })
            }
            ConfirmOutcome::Ewallet(payload) => Ok(CheckoutOutcome::AwaitingPayment(payload)),
        }
    }

    /// Completes an e-wallet session. The session only moves to
    /// `PaymentComplete` once the charge is recorded, the delivery is open
    /// and the lines left the cart, so a failed step can be retried. The
    /// ledger keeps one record per session across retries. A session that
    /// already completed gets its existing record back and no new delivery.
    #[instrument(skip(self, session), fields(session = %session.id()))]
    pub async fn pay(&self, session: &mut CheckoutSession) -> Result<Settlement, CheckoutError> {
        let outcome = session.pay()?;
        let receipt = outcome.receipt().clone();
        let payment = self
            .payment_client
            .record_payment(PaymentCreate {
                session: receipt.session,
                method: receipt.draft.payment_method,
                account: receipt.account(),
                amount: receipt.amount,
                scan_token: receipt.scan_token.clone(),
                reference: receipt.reference.clone(),
            })
            .await?;

        let delivery = match outcome {
            PayOutcome::AlreadyPaid(_) => {
                warn!(payment_id = %payment.id, "Repeated pay; no new delivery");
                None
            }
            PayOutcome::Paid(_) => {
                let customer = receipt.account().name;
                let (delivery, _) = self
                    .place_order(&receipt.draft, customer, PaymentStatus::Paid)
                    .await?;
                session.commit_paid(receipt.clone())?;
                Some(delivery)
            }
        };

        Ok(Settlement {
            receipt,
            payment,
            delivery,
        })
    }

    /// Opens the delivery first, then removes the ordered lines, so a failed
    /// delivery leaves the cart as it was.
    async fn place_order(
        &self,
        draft: &OrderDraft,
        customer: String,
        payment_status: PaymentStatus,
    ) -> Result<(DeliveryRecord, usize), CheckoutError> {
        let total = draft.total()?;
        let params = DeliveryCreate::for_order(
            draft,
            customer,
            self.settings.delivery_eta.clone(),
            payment_status,
            Utc::now().date_naive(),
        );
        let delivery = match self.delivery_client.open_delivery(params).await {
            Ok(delivery) => delivery,
            Err(e) => {
                error!(error = %e, "Opening delivery failed; cart left untouched");
                return Err(e.into());
            }
        };

        let cleared = self.cart_client.remove_cart_entries(draft.entry_ids()).await?;
        info!(
            delivery_id = %delivery.id,
            cleared,
            total = %total,
            "Order placed"
        );
        Ok((delivery, cleared))
    }
}
