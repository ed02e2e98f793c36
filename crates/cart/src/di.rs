use crate::{
    abstract_trait::{
        cart::{
            repository::{DynCartCommandRepository, DynCartQueryRepository},
            service::{DynCartCommandService, DynCartQueryService},
        },
        product_client::DynProductLookup,
    },
    model::cart::Cart,
    product_client::ProductLookupService,
    repository::CartRepository,
    service::{CartCommandService, CartQueryService},
};
use anyhow::{Context, Result};
use product::abstract_trait::product::repository::DynProductQueryRepository;
use prometheus_client::registry::Registry;
use shared::abstract_trait::{DynDurableStore, DynIdGenerator};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub cart_query: DynCartQueryService,
    pub cart_command: DynCartCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("cart_query", &"CartQueryService")
            .field("cart_command", &"CartCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub store: DynDurableStore<Cart>,
    pub id_generator: DynIdGenerator,
    pub product_query: DynProductQueryRepository,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            store,
            id_generator,
            product_query,
        } = deps;

        let product_lookup: DynProductLookup = Arc::new(ProductLookupService::new(product_query));

        let repository = Arc::new(
            CartRepository::load(store, id_generator, product_lookup)
                .await
                .context("failed to load cart collection")?,
        );

        let cart_query_repo: DynCartQueryRepository = repository.clone();
        let cart_command_repo: DynCartCommandRepository = repository;

        let cart_query: DynCartQueryService =
            Arc::new(CartQueryService::new(cart_query_repo, registry));
        let cart_command: DynCartCommandService =
            Arc::new(CartCommandService::new(cart_command_repo, registry));

        Ok(Self {
            cart_query,
            cart_command,
        })
    }
}
