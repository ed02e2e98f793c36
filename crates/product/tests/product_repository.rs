use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product,
    repository::ProductRepository,
};
use shared::{
    abstract_trait::{DynDurableStore, IdGeneratorTrait},
    errors::RepositoryError,
    store::{JsonFileStore, MemoryStore, RecoveryMode},
    utils::UuidGenerator,
};
use std::{collections::HashSet, path::Path, sync::Arc, time::Duration};
use tempfile::tempdir;

struct FixedIdGenerator(&'static str);

impl IdGeneratorTrait for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

fn sample() -> CreateProductRequest {
    CreateProductRequest {
        title: Some("A".into()),
        description: Some("d".into()),
        code: Some("c1".into()),
        price: Some(10.0),
        status: None,
        category: Some("cat".into()),
        stock: Some(5),
        thumbnails: None,
    }
}

async fn memory_repo() -> (ProductRepository, Arc<MemoryStore<Product>>) {
    let store = Arc::new(MemoryStore::<Product>::new());
    let repo = ProductRepository::load(store.clone(), Arc::new(UuidGenerator))
        .await
        .unwrap();
    (repo, store)
}

fn file_store(path: &Path) -> DynDurableStore<Product> {
    Arc::new(JsonFileStore::new(
        path,
        RecoveryMode::Strict,
        Duration::from_secs(5),
    ))
}

#[tokio::test]
async fn create_assigns_id_and_default_status() {
    let (repo, store) = memory_repo().await;

    let created = repo.create_product(&sample()).await.unwrap();

    assert!(!created.id.is_empty());
    assert!(created.status);
    assert_eq!(created.title, "A");
    assert_eq!(store.snapshot().await, vec![created.clone()]);
    assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn create_without_price_is_a_validation_error() {
    let (repo, store) = memory_repo().await;
    let req = CreateProductRequest {
        price: None,
        ..sample()
    };

    let err = repo.create_product(&req).await.unwrap_err();

    assert!(matches!(err, RepositoryError::Validation(ref m) if m.iter().any(|s| s.starts_with("price"))));
    assert!(repo.find_all().await.unwrap().is_empty());
    assert_eq!(store.persist_calls(), 0);
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let (repo, _store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();

    let removed = repo.delete_product(&created.id).await.unwrap();
    let second = repo.delete_product(&created.id).await.unwrap_err();

    assert_eq!(removed, created);
    assert!(matches!(second, RepositoryError::NotFound(_)));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn partial_update_changes_only_the_given_field() {
    let (repo, store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();

    let updated = repo
        .update_product(
            &created.id,
            &UpdateProductRequest {
                price: Some(50.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, Product { price: 50.0, ..created });
    assert_eq!(store.snapshot().await, vec![updated]);
}

#[tokio::test]
async fn update_applies_zero_stock_and_false_status() {
    let (repo, _store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();

    let updated = repo
        .update_product(
            &created.id,
            &UpdateProductRequest {
                stock: Some(0),
                status: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.stock, 0);
    assert!(!updated.status);
}

#[tokio::test]
async fn update_with_empty_title_changes_nothing() {
    let (repo, store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();
    let calls = store.persist_calls();

    let err = repo
        .update_product(
            &created.id,
            &UpdateProductRequest {
                title: Some(String::new()),
                stock: Some(9),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Validation(_)));
    assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created));
    assert_eq!(store.persist_calls(), calls);
}

#[tokio::test]
async fn absent_id_is_not_found_without_mutation() {
    let (repo, store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();
    let calls = store.persist_calls();

    assert_eq!(repo.find_by_id("missing").await.unwrap(), None);
    assert!(matches!(
        repo.update_product("missing", &UpdateProductRequest::default())
            .await
            .unwrap_err(),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        repo.delete_product("missing").await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));

    assert_eq!(repo.find_all().await.unwrap(), vec![created]);
    assert_eq!(store.persist_calls(), calls);
}

#[tokio::test]
async fn ids_are_unique_across_creates() {
    let (repo, _store) = memory_repo().await;

    for _ in 0..100 {
        repo.create_product(&sample()).await.unwrap();
    }

    let ids: HashSet<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids.len(), 100);
}

#[tokio::test]
async fn generated_id_collision_is_rejected() {
    let store = Arc::new(MemoryStore::<Product>::new());
    let repo = ProductRepository::load(store.clone(), Arc::new(FixedIdGenerator("same")))
        .await
        .unwrap();

    repo.create_product(&sample()).await.unwrap();
    let err = repo.create_product(&sample()).await.unwrap_err();

    assert!(matches!(err, RepositoryError::IdCollision(ref id) if id == "same"));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn persistence_failures_are_surfaced_by_every_mutation() {
    let (repo, store) = memory_repo().await;
    let created = repo.create_product(&sample()).await.unwrap();
    store.set_fail_writes(true);

    let create = repo.create_product(&sample()).await.unwrap_err();
    let update = repo
        .update_product(
            &created.id,
            &UpdateProductRequest {
                stock: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let delete = repo.delete_product(&created.id).await.unwrap_err();

    assert!(matches!(create, RepositoryError::Persistence(_)));
    assert!(matches!(update, RepositoryError::Persistence(_)));
    assert!(matches!(delete, RepositoryError::Persistence(_)));
    assert_eq!(store.snapshot().await, vec![created]);
}

#[tokio::test]
async fn failed_create_keeps_the_record_in_memory() {
    let (repo, store) = memory_repo().await;
    store.set_fail_writes(true);

    assert!(repo.create_product(&sample()).await.is_err());

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn collection_survives_a_reload_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("products.json");

    let repo = ProductRepository::load(file_store(&path), Arc::new(UuidGenerator))
        .await
        .unwrap();
    repo.create_product(&sample()).await.unwrap();
    repo.create_product(&CreateProductRequest {
        title: Some("B".into()),
        thumbnails: Some(vec!["img/b.png".into()]),
        ..sample()
    })
    .await
    .unwrap();
    let before = repo.find_all().await.unwrap();

    let reloaded = ProductRepository::load(file_store(&path), Arc::new(UuidGenerator))
        .await
        .unwrap();

    assert_eq!(reloaded.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn corrupted_backing_file_fails_strict_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, "[{\"id\":").unwrap();

    let result = ProductRepository::load(file_store(&path), Arc::new(UuidGenerator)).await;

    assert!(matches!(result, Err(RepositoryError::Persistence(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("products.json");
    let repo = Arc::new(
        ProductRepository::load(file_store(&path), Arc::new(UuidGenerator))
            .await
            .unwrap(),
    );

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create_product(&CreateProductRequest {
                    code: Some(format!("c{i}")),
                    ..sample()
                })
                .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let on_disk = ProductRepository::load(file_store(&path), Arc::new(UuidGenerator))
        .await
        .unwrap()
        .find_all()
        .await
        .unwrap();
    let ids: HashSet<_> = on_disk.iter().map(|p| p.id.clone()).collect();
    let codes: HashSet<_> = on_disk.iter().map(|p| p.code.clone()).collect();

    assert_eq!(on_disk.len(), 32);
    assert_eq!(ids.len(), 32);
    assert_eq!(codes.len(), 32);
}
