use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::chat_actor::ChatError;
use crate::domain::{ChatMessage, ChatMessageCreate};

/// Client for the seller conversation.
#[derive(Clone)]
pub struct ChatClient {
    inner: ResourceClient<ChatMessage>,
}

crate::impl_basic_client!(ChatClient, ChatMessage, ChatError, message, messages);

impl ChatClient {
    /// Appends a buyer message. Blank text is refused before reaching the actor.
    #[instrument(skip(self, text))]
    pub async fn send_message(&self, text: &str) -> Result<ChatMessage, ChatError> {
        let params = ChatMessageCreate::from_buyer(text)?;
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }
}
