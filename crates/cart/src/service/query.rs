use crate::{
    abstract_trait::cart::{repository::DynCartQueryRepository, service::CartQueryServiceTrait},
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
pub struct CartQueryService {
    query: DynCartQueryRepository,
    metrics: Metrics,
}

impl CartQueryService {
    pub fn new(query: DynCartQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("cart_query_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl CartQueryServiceTrait for CartQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Cart>>, ServiceError> {
        let started = Instant::now();

        let carts = match self.query.find_all().await {
            Ok(carts) => carts,
            Err(e) => {
                error!("❌ Failed to fetch all carts: {e}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Found {} carts", carts.len());
        self.metrics
            .record(Method::Get, StatusUtils::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponse::success("Carts retrieved successfully", carts))
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Cart>, ServiceError> {
        let started = Instant::now();

        let cart = match self.query.find_by_id(id).await {
            Ok(Some(cart)) => cart,
            Ok(None) => {
                error!("❌ Cart not found with ID: {id}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(RepositoryError::NotFound(format!(
                    "Cart {id} not found"
                ))));
            }
            Err(e) => {
                error!("❌ Failed to fetch cart {id}: {e}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Cart retrieved: {id} ({} line items)", cart.products.len());
        self.metrics
            .record(Method::Get, StatusUtils::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponse::success("Cart retrieved successfully", cart))
    }
}
