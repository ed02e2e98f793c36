use super::ProductRepository;
use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[async_trait]
impl ProductQueryRepositoryTrait for ProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let products = self.products.read().await;

        info!("🔍 Fetching all products ({})", products.len());

        Ok(products.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let products = self.products.read().await;

        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}
