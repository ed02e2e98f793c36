use crate::model::cart::Cart;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynCartQueryService = Arc<dyn CartQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Cart>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Cart>, ServiceError>;
}
