use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::catalog_actor::{seed_catalog, seed_catalog_floor};
use crate::chat_actor::seed_conversation;
use crate::clients::{
    CartClient, CatalogClient, ChatClient, CheckoutClient, CheckoutSettings, DeliveryClient,
    PaymentClient,
};
use crate::config::MarketConfig;
use crate::delivery_actor::seed_deliveries;
use crate::domain::{
    CartEntry, CartEntryId, ChatMessage, DeliveryId, DeliveryRecord, IdGenerator, MessageId,
    PaymentId, PaymentRecord, Product, ProductId,
};
use crate::notice::Notice;

/// Id source for one store: creation timestamps, never at or below `floor`.
fn ids_after<I: From<u64> + 'static>(floor: u64) -> impl Fn() -> I + Send + Sync + 'static {
    let ids = IdGenerator::starting_after(floor);
    move || I::from(ids.next_id())
}

/// The marketplace: owns every store actor and hands out clients to them.
///
/// There is no global store. Whoever holds a `MarketSystem` (or a clone of
/// one of its clients) talks to the same actors.
pub struct MarketSystem {
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub delivery_client: DeliveryClient,
    pub payment_client: PaymentClient,
    pub chat_client: ChatClient,
    pub checkout_client: CheckoutClient,
    pub notice: Notice,
    config: MarketConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MarketSystem {
    /// Spawns the store actors. Must be called inside a tokio runtime.
    pub fn new(config: MarketConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Catalog, seeded with the demo listings
        let (catalog_actor, catalog_resource_client) = ResourceActor::<Product>::with_seed(
            buffer,
            seed_catalog(),
            ids_after::<ProductId>(seed_catalog_floor()),
        );
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // 2. Cart
        let (cart_actor, cart_resource_client) =
            ResourceActor::<CartEntry>::new(buffer, ids_after::<CartEntryId>(0));
        let cart_client = CartClient::new(cart_resource_client);
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Deliveries, seeded with shipments already on the road
        let deliveries = seed_deliveries();
        let delivery_floor = deliveries.iter().map(|d| d.id.as_u64()).max().unwrap_or(0);
        let (delivery_actor, delivery_resource_client) =
            ResourceActor::<DeliveryRecord>::with_seed(
                buffer,
                deliveries,
                ids_after::<DeliveryId>(delivery_floor),
            );
        let delivery_client = DeliveryClient::new(delivery_resource_client);
        let delivery_handle = tokio::spawn(delivery_actor.run());

        // 4. Payment ledger
        let (payment_actor, payment_resource_client) =
            ResourceActor::<PaymentRecord>::new(buffer, ids_after::<PaymentId>(0));
        let payment_client = PaymentClient::new(payment_resource_client);
        let payment_handle = tokio::spawn(payment_actor.run());

        // 5. Seller chat
        let conversation = seed_conversation();
        let chat_floor = conversation.iter().map(|m| m.id.as_u64()).max().unwrap_or(0);
        let (chat_actor, chat_resource_client) =
            ResourceActor::<ChatMessage>::with_seed(
                buffer,
                conversation,
                ids_after::<MessageId>(chat_floor),
            );
        let chat_client = ChatClient::new(chat_resource_client);
        let chat_handle = tokio::spawn(chat_actor.run());

        // 6. Checkout orchestrates cart, deliveries and payments
        let checkout_client = CheckoutClient::new(
            cart_client.clone(),
            delivery_client.clone(),
            payment_client.clone(),
            CheckoutSettings::from(&config),
        );

        info!(buffer, "Market system started");

        Self {
            catalog_client,
            cart_client,
            delivery_client,
            payment_client,
            chat_client,
            checkout_client,
            notice: Notice::new(),
            config,
            handles: vec![
                catalog_handle,
                cart_handle,
                delivery_handle,
                payment_handle,
                chat_handle,
            ],
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Drops every client and waits for the actors to drain. Clones of the
    /// clients held elsewhere keep their actors alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down market...");

        drop(self.checkout_client);
        drop(self.catalog_client);
        drop(self.cart_client);
        drop(self.delivery_client);
        drop(self.payment_client);
        drop(self.chat_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Market shutdown complete.");
        Ok(())
    }
}
