use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{PaymentCreate, PaymentRecord, SessionId};
use crate::payment_actor::PaymentError;

/// Client for the payment ledger actor.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<PaymentRecord>,
}

crate::impl_basic_client!(PaymentClient, PaymentRecord, PaymentError, payment, payments);

impl PaymentClient {
    /// Records a charge for `params.session` unless that session already has
    /// one, in which case the existing record comes back.
    #[instrument(skip(self, params), fields(session = %params.session, amount = %params.amount))]
    pub async fn record_payment(&self, params: PaymentCreate) -> Result<PaymentRecord, PaymentError> {
        if let Some(existing) = self.find_by_session(params.session).await? {
            info!(payment_id = %existing.id, "Session already paid");
            return Ok(existing);
        }
        debug!("Sending request");
        let record = self.inner.create(params).await?;
        info!(payment_id = %record.id, "Payment recorded");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn find_by_session(&self, session: SessionId) -> Result<Option<PaymentRecord>, PaymentError> {
        let payments = self.list_payments().await?;
        Ok(payments.into_iter().find(|record| record.session == session))
    }
}
