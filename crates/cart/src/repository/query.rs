use super::CartRepository;
use crate::{
    abstract_trait::cart::repository::CartQueryRepositoryTrait, model::cart::Cart as CartModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[async_trait]
impl CartQueryRepositoryTrait for CartRepository {
    async fn find_all(&self) -> Result<Vec<CartModel>, RepositoryError> {
        let carts = self.carts.read().await;

        info!("🔍 Fetching all carts ({})", carts.len());

        Ok(carts.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CartModel>, RepositoryError> {
        info!("🆔 Fetching cart by ID: {id}");

        let carts = self.carts.read().await;

        Ok(carts.iter().find(|c| c.id == id).cloned())
    }
}
