use crate::model::product::Product;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError>;
}
