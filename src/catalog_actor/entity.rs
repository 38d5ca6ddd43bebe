use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId};

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Patch = (); // Listings are replaced, never edited

    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from posting parameters.
    ///
    /// # Notes
    /// The catalog accepts whatever the posting form already checked; it
    /// never rejects a listing on content.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Ok(params.into_product(id))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
