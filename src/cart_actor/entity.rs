use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{CartEntry, CartEntryCreate, CartEntryId, CartEntryPatch};

impl Entity for CartEntry {
    type Id = CartEntryId;
    type CreateParams = CartEntryCreate;
    type Patch = CartEntryPatch;

    const KIND: &'static str = "cart entry";

    fn id(&self) -> &CartEntryId {
        &self.id
    }

    /// Wraps the copied product with the validated selection.
    fn from_create_params(id: CartEntryId, params: CartEntryCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            quantity: params.selection.quantity(),
            unit: params.selection.unit().to_string(),
            product: params.product,
        })
    }

    /// Sets a new quantity on the replacement copy.
    ///
    /// # Errors
    /// Refuses a non-positive quantity so an edit cannot zero out a line.
    fn on_update(&mut self, patch: CartEntryPatch) -> Result<(), String> {
        if patch.quantity <= Decimal::ZERO {
            return Err(format!("Invalid quantity: {}", patch.quantity));
        }
        self.quantity = patch.quantity;
        Ok(())
    }
}
