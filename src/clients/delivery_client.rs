use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::delivery_actor::DeliveryError;
use crate::domain::{DeliveryCreate, DeliveryRecord};

/// Client for the delivery tracking actor.
#[derive(Clone)]
pub struct DeliveryClient {
    inner: ResourceClient<DeliveryRecord>,
}

crate::impl_basic_client!(DeliveryClient, DeliveryRecord, DeliveryError, delivery, deliveries);

impl DeliveryClient {
    #[instrument(skip(self, params), fields(product = %params.product))]
    pub async fn open_delivery(&self, params: DeliveryCreate) -> Result<DeliveryRecord, DeliveryError> {
        debug!("Sending request");
        let record = self.inner.create(params).await?;
        info!(delivery_id = %record.id, "Delivery opened");
        Ok(record)
    }
}
