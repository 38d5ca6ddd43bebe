use crate::actor_framework::Entity;
use crate::domain::{ChatMessage, ChatMessageCreate, MessageId};

impl Entity for ChatMessage {
    type Id = MessageId;
    type CreateParams = ChatMessageCreate;
    type Patch = ();

    const KIND: &'static str = "message";

    fn id(&self) -> &MessageId {
        &self.id
    }

    fn from_create_params(id: MessageId, params: ChatMessageCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            sender: params.sender,
            text: params.text,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
