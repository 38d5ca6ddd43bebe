//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_delete_many`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

pub type MockReceiver<T> = mpsc::Receiver<ResourceRequest<T>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client talks to a channel the test owns instead of a running
/// `ResourceActor`, so a test can inspect each request and answer it with
/// whatever success or failure the scenario needs.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, MockReceiver<T>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut MockReceiver<T>,
) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut MockReceiver<T>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut MockReceiver<T>) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut MockReceiver<T>,
) -> Option<(T::Id, T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut MockReceiver<T>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteMany request
pub async fn expect_delete_many<T: Entity>(
    receiver: &mut MockReceiver<T>,
) -> Option<(Vec<T::Id>, Response<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::DeleteMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::seed_catalog;
    use crate::clients::CartClient;
    use crate::domain::{CartEntry, CartEntryId, CartSelection};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<CartEntry>(10);
        let client = CartClient::new(inner);
        let tomatoes = seed_catalog()[0].clone();

        let product = tomatoes.clone();
        let add_task = tokio::spawn(async move {
            let selection = CartSelection::parse("2", "kg").unwrap();
            client.add_to_cart(&product, selection).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.product.name, "Tomatoes");
        assert_eq!(params.selection.quantity(), Decimal::from(2));

        let entry = CartEntry {
            id: CartEntryId::new(1),
            product: params.product,
            quantity: params.selection.quantity(),
            unit: params.selection.unit().to_string(),
        };
        responder.send(Ok(entry.clone())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(entry));
    }

    #[tokio::test]
    async fn non_positive_quantity_never_reaches_the_actor() {
        let (inner, mut receiver) = create_mock_client::<CartEntry>(10);
        let client = CartClient::new(inner);

        let result = client
            .update_cart_entry_quantity(CartEntryId::new(1), Decimal::ZERO)
            .await;
        assert!(result.is_err());

        drop(client);
        assert!(receiver.recv().await.is_none());
    }
}
