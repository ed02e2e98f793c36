use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product,
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self { command, metrics }
    }

    fn complete(
        &self,
        method: Method,
        started: Instant,
        outcome: &Result<Product, RepositoryError>,
        operation: &str,
    ) {
        let status = match outcome {
            Ok(product) => {
                info!("✅ {operation} succeeded for product {}", product.id);
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
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        info!("🏗️ Creating product: {:?}", req.title);

        let started = Instant::now();
        let outcome = self.command.create_product(req).await;
        self.complete(Method::Post, started, &outcome, "create_product");

        Ok(ApiResponse::success(
            "Product created successfully",
            outcome?,
        ))
    }

    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        info!("🔄 Updating product {id}");

        let started = Instant::now();
        let outcome = self.command.update_product(id, req).await;
        self.complete(Method::Put, started, &outcome, "update_product");

        Ok(ApiResponse::success(
            "Product updated successfully",
            outcome?,
        ))
    }

    async fn delete_product(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError> {
        info!("🗑️ Deleting product {id}");

        let started = Instant::now();
        let outcome = self.command.delete_product(id).await;
        self.complete(Method::Delete, started, &outcome, "delete_product");

        Ok(ApiResponse::success(
            "Product deleted successfully",
            outcome?,
        ))
    }
}
