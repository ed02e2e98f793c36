mod command;
mod query;

use crate::{abstract_trait::product_client::DynProductLookup, model::cart::Cart as CartModel};
use shared::{
    abstract_trait::{DynDurableStore, DynIdGenerator},
    errors::RepositoryError,
};
use tokio::sync::RwLock;
use tracing::info;

/// Owns the cart collection. Product references are checked through the
/// lookup port while the cart write lock is held; the product side never
/// calls back into carts.
pub struct CartRepository {
    carts: RwLock<Vec<CartModel>>,
    store: DynDurableStore<CartModel>,
    id_generator: DynIdGenerator,
    products: DynProductLookup,
}

impl CartRepository {
    pub async fn load(
        store: DynDurableStore<CartModel>,
        id_generator: DynIdGenerator,
        products: DynProductLookup,
    ) -> Result<Self, RepositoryError> {
        let carts = store.load().await?;

        info!("🛒 Cart repository ready with {} carts", carts.len());

        Ok(Self {
            carts: RwLock::new(carts),
            store,
            id_generator,
            products,
        })
    }

    async fn ensure_product(&self, product_id: &str) -> Result<(), RepositoryError> {
        if self.products.exists(product_id).await? {
            Ok(())
        } else {
            Err(RepositoryError::validation(format!(
                "productId: product {product_id} does not exist"
            )))
        }
    }
}
