use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EwalletAccount, PaymentId, PaymentMethod, SessionId};

/// A completed e-wallet charge. `session` is the checkout session that paid,
/// so one session never produces two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub session: SessionId,
    pub method: PaymentMethod,
    pub account: EwalletAccount,
    pub amount: Decimal,
    pub scan_token: String,
    /// Optional note the payer typed on the e-wallet form.
    pub reference: Option<String>,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub session: SessionId,
    pub method: PaymentMethod,
    pub account: EwalletAccount,
    pub amount: Decimal,
    pub scan_token: String,
    pub reference: Option<String>,
}
