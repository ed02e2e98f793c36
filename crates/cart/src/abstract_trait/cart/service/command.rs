use crate::{
    domain::requests::cart::{AddProductToCartRequest, CreateCartRequest},
    model::cart::Cart,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynCartCommandService = Arc<dyn CartCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandServiceTrait {
    async fn create_cart(&self, req: &CreateCartRequest) -> Result<ApiResponse<Cart>, ServiceError>;
    async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
        req: &AddProductToCartRequest,
    ) -> Result<ApiResponse<Cart>, ServiceError>;
    async fn delete_cart(&self, id: &str) -> Result<ApiResponse<Cart>, ServiceError>;
}
