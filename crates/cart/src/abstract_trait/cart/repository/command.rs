use crate::{
    domain::requests::cart::{AddProductToCartRequest, CreateCartRequest},
    model::cart::Cart as CartModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartCommandRepositoryTrait {
    async fn create_cart(&self, req: &CreateCartRequest) -> Result<CartModel, RepositoryError>;
    async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
        req: &AddProductToCartRequest,
    ) -> Result<CartModel, RepositoryError>;
    async fn delete_cart(&self, id: &str) -> Result<CartModel, RepositoryError>;
}
