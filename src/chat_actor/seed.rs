use crate::domain::{ChatMessage, MessageId, Sender};

/// The conversation already in progress with the demo seller.
pub fn seed_conversation() -> Vec<ChatMessage> {
    let seller = || Sender::Seller("Seller Juan".to_string());
    let lines = [
        (seller(), "Hello! How can I help you today?"),
        (Sender::Buyer, "Hi, I'm interested in buying corn. Is it still available?"),
        (seller(), "Yes! I have fresh stock from yesterday's harvest."),
        (Sender::Buyer, "Great! How much per kilo?"),
        (seller(), "₱35 per kilo."),
    ];
    lines
        .into_iter()
        .zip(1u64..)
        .map(|((sender, text), id)| ChatMessage {
            id: MessageId::new(id),
            sender,
            text: text.to_string(),
        })
        .collect()
}
