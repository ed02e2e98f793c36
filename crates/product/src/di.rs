use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    model::product::Product,
    repository::ProductRepository,
    service::{ProductCommandService, ProductQueryService},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::abstract_trait::{DynDurableStore, DynIdGenerator};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query_repo: DynProductQueryRepository,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query_repo", &"DynProductQueryRepository")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: DynDurableStore<Product>,
    pub id_generator: DynIdGenerator,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            store,
            id_generator,
        } = deps;

        let repository = Arc::new(
            ProductRepository::load(store, id_generator)
                .await
                .context("failed to load product collection")?,
        );

        let product_query_repo: DynProductQueryRepository = repository.clone();
        let product_command_repo: DynProductCommandRepository = repository;

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
        ));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo,
            registry,
        ));

        Ok(Self {
            product_query_repo,
            product_query,
            product_command,
        })
    }
}
