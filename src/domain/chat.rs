use serde::{Deserialize, Serialize};

use super::validation::{require, ValidationError};
use super::MessageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Buyer,
    Seller(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ChatMessageCreate {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessageCreate {
    /// A message typed by the buyer. Blank text is refused.
    pub fn from_buyer(text: &str) -> Result<Self, ValidationError> {
        require("Message", text)?;
        Ok(Self {
            sender: Sender::Buyer,
            text: text.to_string(),
        })
    }
}
