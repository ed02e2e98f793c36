use crate::model::cart::Cart as CartModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CartModel>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<CartModel>, RepositoryError>;
}
