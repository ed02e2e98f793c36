use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    async fn delete_product(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError>;
}
