use crate::{
    abstract_trait::cart::{repository::DynCartCommandRepository, service::CartCommandServiceTrait},
    domain::requests::cart::{AddProductToCartRequest, CreateCartRequest},
    model::cart::Cart,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartCommandService {
    command: DynCartCommandRepository,
    metrics: Metrics,
}

impl CartCommandService {
    pub fn new(command: DynCartCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("cart_command_service", registry);

        Self { command, metrics }
    }

    fn complete(
        &self,
        method: Method,
        started: Instant,
        outcome: &Result<Cart, RepositoryError>,
        operation: &str,
    ) {
        let status = match outcome {
            Ok(cart) => {
                info!("✅ {operation} succeeded for cart {}", cart.id);
                StatusUtils::Success
            }
            Err(e) => {
                error!("❌ {operation} failed: {e}");
                StatusUtils::Error
            }
        };

        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl CartCommandServiceTrait for CartCommandService {
    async fn create_cart(&self, req: &CreateCartRequest) -> Result<ApiResponse<Cart>, ServiceError> {
        info!("🏗️ Creating cart with {} line items", req.products.len());

        let started = Instant::now();
        let outcome = self.command.create_cart(req).await;
        self.complete(Method::Post, started, &outcome, "create_cart");

        Ok(ApiResponse::success("Cart created successfully", outcome?))
    }

    async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
        req: &AddProductToCartRequest,
    ) -> Result<ApiResponse<Cart>, ServiceError> {
        info!("🛒 Adding product {product_id} to cart {cart_id}");

        let started = Instant::now();
        let outcome = self
            .command
            .add_product_to_cart(cart_id, product_id, req)
            .await;
        self.complete(Method::Post, started, &outcome, "add_product_to_cart");

        Ok(ApiResponse::success(
            "Product added to cart successfully",
            outcome?,
        ))
    }

    async fn delete_cart(&self, id: &str) -> Result<ApiResponse<Cart>, ServiceError> {
        info!("🗑️ Deleting cart {id}");

        let started = Instant::now();
        let outcome = self.command.delete_cart(id).await;
        self.complete(Method::Delete, started, &outcome, "delete_cart");

        Ok(ApiResponse::success("Cart deleted successfully", outcome?))
    }
}
