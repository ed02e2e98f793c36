use anyhow::{Context, Result};
use cart::{
    di::{DependenciesInject as CartDependencies, DependenciesInjectDeps as CartDeps},
    model::cart::Cart,
};
use product::{
    di::{DependenciesInject as ProductDependencies, DependenciesInjectDeps as ProductDeps},
    model::product::Product,
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynDurableStore, DynIdGenerator},
    config::StoreConfig,
    store::JsonFileStore,
    utils::UuidGenerator,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub product: ProductDependencies,
    pub cart: CartDependencies,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub async fn new(config: &StoreConfig) -> Result<Self> {
        info!(
            "📂 Using product file {} and cart file {}",
            config.products_path.display(),
            config.carts_path.display()
        );

        let products: DynDurableStore<Product> = Arc::new(JsonFileStore::new(
            config.products_path.clone(),
            config.recovery,
            config.timeout,
        ));
        let carts: DynDurableStore<Cart> = Arc::new(JsonFileStore::new(
            config.carts_path.clone(),
            config.recovery,
            config.timeout,
        ));

        Self::with_stores(products, carts, Arc::new(UuidGenerator)).await
    }

    pub async fn with_stores(
        products: DynDurableStore<Product>,
        carts: DynDurableStore<Cart>,
        id_generator: DynIdGenerator,
    ) -> Result<Self> {
        let mut registry = Registry::default();

        let product = ProductDependencies::new(
            ProductDeps {
                store: products,
                id_generator: id_generator.clone(),
            },
            &mut registry,
        )
        .await
        .context("Failed to initialize product dependencies")?;

        let cart = CartDependencies::new(
            CartDeps {
                store: carts,
                id_generator,
                product_query: product.product_query_repo.clone(),
            },
            &mut registry,
        )
        .await
        .context("Failed to initialize cart dependencies")?;

        Ok(Self {
            product,
            cart,
            registry: Arc::new(registry),
        })
    }
}
