use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        let started = Instant::now();

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                error!("❌ Failed to fetch all products: {e}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Found {} products", products.len());
        self.metrics
            .record(Method::Get, StatusUtils::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponse::success(
            "Products retrieved successfully",
            products,
        ))
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError> {
        let started = Instant::now();

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(RepositoryError::NotFound(format!(
                    "Product {id} not found"
                ))));
            }
            Err(e) => {
                error!("❌ Failed to fetch product {id}: {e}");
                self.metrics
                    .record(Method::Get, StatusUtils::Error, started.elapsed().as_secs_f64());
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product retrieved: '{}' (ID: {id})", product.title);
        self.metrics
            .record(Method::Get, StatusUtils::Success, started.elapsed().as_secs_f64());

        Ok(ApiResponse::success(
            "Product retrieved successfully",
            product,
        ))
    }
}
