use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{PaymentCreate, PaymentId, PaymentRecord};

impl Entity for PaymentRecord {
    type Id = PaymentId;
    type CreateParams = PaymentCreate;
    type Patch = (); // Payments are final

    const KIND: &'static str = "payment";

    fn id(&self) -> &PaymentId {
        &self.id
    }

    /// Stamps the charge with the time it was recorded.
    fn from_create_params(id: PaymentId, params: PaymentCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            session: params.session,
            method: params.method,
            account: params.account,
            amount: params.amount,
            scan_token: params.scan_token,
            reference: params.reference,
            paid_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
