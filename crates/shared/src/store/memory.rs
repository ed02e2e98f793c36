use crate::{abstract_trait::DurableStoreTrait, errors::StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// In-memory store for wiring repositories without touching the filesystem.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_writes: AtomicBool,
    persist_calls: AtomicUsize,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: AtomicBool::new(false),
            persist_calls: AtomicUsize::new(0),
        }
    }

    /// Makes every subsequent `persist` fail until switched back off.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }
}

impl<T: Clone> MemoryStore<T> {
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl<T> DurableStoreTrait<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store configured to fail writes".into(),
            ));
        }

        *self.records.lock().await = records.to_vec();
        Ok(())
    }
}
