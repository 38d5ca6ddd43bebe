use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ValidationError;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart entry not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Cart entry rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound { id, .. } => CartError::NotFound(id),
            FrameworkError::Rejected(reason) => CartError::Rejected(reason),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
