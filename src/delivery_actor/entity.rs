use crate::actor_framework::Entity;
use crate::domain::{DeliveryCreate, DeliveryId, DeliveryRecord};

impl Entity for DeliveryRecord {
    type Id = DeliveryId;
    type CreateParams = DeliveryCreate;
    type Patch = ();

    const KIND: &'static str = "delivery";

    fn id(&self) -> &DeliveryId {
        &self.id
    }

    fn from_create_params(id: DeliveryId, params: DeliveryCreate) -> Result<Self, String> {
        Ok(params.into_record(id))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
