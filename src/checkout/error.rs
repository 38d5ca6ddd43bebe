use thiserror::Error;

use crate::cart_actor::CartError;
use crate::delivery_actor::DeliveryError;
use crate::domain::ValidationError;
use crate::payment_actor::PaymentError;

/// Errors that can occur while walking a checkout session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Cannot {action} at the {stage} stage")]
    InvalidTransition {
        stage: &'static str,
        action: &'static str,
    },
    #[error("Malformed handoff payload: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
