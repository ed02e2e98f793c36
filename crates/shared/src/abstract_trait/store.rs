use crate::errors::StoreError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDurableStore<T> = Arc<dyn DurableStoreTrait<T> + Send + Sync>;

/// Load/persist primitive for one named collection.
///
/// `persist` always replaces the whole collection; there is no append.
#[async_trait]
pub trait DurableStoreTrait<T>
where
    T: Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError>;
    async fn persist(&self, records: &[T]) -> Result<(), StoreError>;
}
