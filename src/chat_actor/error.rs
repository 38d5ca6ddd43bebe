use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ValidationError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ChatError {
    fn from(error: FrameworkError) -> Self {
        ChatError::ActorCommunicationError(error.to_string())
    }
}
