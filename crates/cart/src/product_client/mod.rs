use crate::abstract_trait::product_client::ProductLookupTrait;
use async_trait::async_trait;
use product::abstract_trait::product::repository::DynProductQueryRepository;
use shared::errors::RepositoryError;

/// Resolves product references against the product repository in-process.
pub struct ProductLookupService {
    query: DynProductQueryRepository,
}

impl ProductLookupService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductLookupTrait for ProductLookupService {
    async fn exists(&self, product_id: &str) -> Result<bool, RepositoryError> {
        Ok(self.query.find_by_id(product_id).await?.is_some())
    }
}
