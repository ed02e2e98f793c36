use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductLookup = Arc<dyn ProductLookupTrait + Send + Sync>;

#[async_trait]
pub trait ProductLookupTrait {
    async fn exists(&self, product_id: &str) -> Result<bool, RepositoryError>;
}
