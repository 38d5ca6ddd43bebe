use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while recording payments.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PaymentError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound { id, .. } => PaymentError::NotFound(id),
            other => PaymentError::ActorCommunicationError(other.to_string()),
        }
    }
}
