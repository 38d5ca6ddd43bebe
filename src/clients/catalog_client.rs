use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog_actor::CatalogError;
use crate::domain::{CatalogQuery, Product, ProductCreate, ProductId, ProductListing, SellerRef};

/// Client for the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(CatalogClient, Product, CatalogError, product, products);

impl CatalogClient {
    /// Stores a listing under a fresh id. Never rejects on content.
    #[instrument(skip(self, params), fields(product_name = %params.name, category = %params.category))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let product = self.inner.create(params).await?;
        info!(product_id = %product.id, "Product listed");
        Ok(product)
    }

    /// Checks the posting form, then lists it.
    #[instrument(skip(self, listing, seller))]
    pub async fn post_listing(
        &self,
        listing: &ProductListing,
        seller: Option<SellerRef>,
    ) -> Result<Product, CatalogError> {
        let params = listing.validate(seller)?;
        self.add_product(params).await
    }

    /// Removes a listing. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<(), CatalogError> {
        debug!("Sending request");
        match self.inner.delete(id).await? {
            Some(product) => info!(product_name = %product.name, "Product removed"),
            None => debug!("No such product; nothing removed"),
        }
        Ok(())
    }

    /// Full listing filtered by `query`, catalog order preserved.
    #[instrument(skip(self))]
    pub async fn browse(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        let products = self.list_products().await?;
        let matching = query.apply(products);
        debug!(count = matching.len(), "Browsed catalog");
        Ok(matching)
    }
}
