mod command;
mod query;

use crate::model::product::Product as ProductModel;
use shared::{
    abstract_trait::{DynDurableStore, DynIdGenerator},
    errors::RepositoryError,
};
use tokio::sync::RwLock;
use tracing::info;

/// Owns the product collection.
///
/// Mutations hold the write lock across mutate-and-persist, so they are
/// serialized against each other and readers never see a half-applied change.
pub struct ProductRepository {
    products: RwLock<Vec<ProductModel>>,
    store: DynDurableStore<ProductModel>,
    id_generator: DynIdGenerator,
}

impl ProductRepository {
    pub async fn load(
        store: DynDurableStore<ProductModel>,
        id_generator: DynIdGenerator,
    ) -> Result<Self, RepositoryError> {
        let products = store.load().await?;

        info!("📦 Product repository ready with {} products", products.len());

        Ok(Self {
            products: RwLock::new(products),
            store,
            id_generator,
        })
    }
}
