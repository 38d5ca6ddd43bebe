use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::CartError;
use crate::domain::{
    CartEntry, CartEntryCreate, CartEntryId, CartEntryPatch, CartSelection, Product,
    ValidationError,
};

/// Client for the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartEntry>,
}

crate::impl_basic_client!(CartClient, CartEntry, CartError, cart_entry, cart);

impl CartClient {
    /// Adds a copy of `product` with the buyer's validated selection.
    #[instrument(
        skip(self, product, selection),
        fields(product_id = %product.id, quantity = %selection.quantity(), unit = %selection.unit())
    )]
    pub async fn add_to_cart(
        &self,
        product: &Product,
        selection: CartSelection,
    ) -> Result<CartEntry, CartError> {
        debug!("Sending request");
        let entry = self
            .inner
            .create(CartEntryCreate {
                product: product.clone(),
                selection,
            })
            .await?;
        info!(entry_id = %entry.id, product_name = %product.name, "Added to cart");
        Ok(entry)
    }

    /// Removes one line. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: CartEntryId) -> Result<(), CartError> {
        debug!("Sending request");
        if self.inner.delete(id).await?.is_none() {
            debug!("No such cart entry; nothing removed");
        }
        Ok(())
    }

    /// Replaces the line with a copy carrying `quantity`.
    #[instrument(skip(self))]
    pub async fn update_cart_entry_quantity(
        &self,
        id: CartEntryId,
        quantity: Decimal,
    ) -> Result<CartEntry, CartError> {
        if quantity <= Decimal::ZERO {
            warn!("Refusing non-positive quantity");
            return Err(ValidationError::InvalidQuantity(quantity.to_string()).into());
        }
        debug!("Sending request");
        Ok(self.inner.update(id, CartEntryPatch { quantity }).await?)
    }

    /// Removes the given lines, skipping any already gone. Returns how many went.
    #[instrument(skip(self, ids), fields(requested = ids.len()))]
    pub async fn remove_cart_entries(&self, ids: Vec<CartEntryId>) -> Result<usize, CartError> {
        debug!("Sending request");
        let removed = self.inner.delete_many(ids).await?;
        info!(removed, "Cart entries removed");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        Ok(self.inner.clear().await?)
    }
}
