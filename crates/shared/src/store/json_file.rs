use crate::{abstract_trait::DurableStoreTrait, errors::StoreError};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    ffi::OsString,
    fs::File,
    future::Future,
    io::{self, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::fs;
use tracing::{error, info, warn};
use uuid::Uuid;

/// What `load` does when the backing file exists but is not a valid JSON list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Report `StoreError::Corrupted` and let the caller decide.
    #[default]
    Strict,
    /// Log the problem and start from an empty collection.
    Lenient,
}

/// Durable store backed by a single pretty-printed JSON file.
///
/// Writes go to a sibling temporary file which is synced and then renamed over
/// the target, so a reader sees either the previous or the next collection.
///
/// Each write runs as one blocking job under `writer`, which remembers the
/// sequence number of the last collection that reached disk. A job whose
/// caller already gave up, or that is older than what is on disk, writes
/// nothing.
pub struct JsonFileStore<T> {
    path: PathBuf,
    recovery: RecoveryMode,
    timeout: Duration,
    sequence: AtomicU64,
    writer: Arc<Mutex<u64>>,
    _records: PhantomData<fn() -> T>,
}

struct WriteJob {
    path: PathBuf,
    bytes: Vec<u8>,
    sequence: u64,
    abandoned: Arc<AtomicBool>,
    writer: Arc<Mutex<u64>>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>, recovery: RecoveryMode, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            recovery,
            timeout,
            sequence: AtomicU64::new(0),
            writer: Arc::new(Mutex::new(0)),
            _records: PhantomData,
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn timeout_error(&self) -> StoreError {
        StoreError::Timeout {
            path: self.path.clone(),
            secs: self.timeout.as_secs(),
        }
    }

    async fn bounded<F, R>(&self, fut: F) -> Result<R, StoreError>
    where
        F: Future<Output = R>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| self.timeout_error())
    }
}

impl WriteJob {
    fn run(self) -> io::Result<()> {
        let mut last_written = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.abandoned.load(Ordering::SeqCst) {
            warn!(
                "⏱️ Dropping timed-out write to {}",
                self.path.display()
            );
            return Ok(());
        }
        if self.sequence <= *last_written {
            warn!(
                "⏭️ Skipping stale write #{} to {} (#{} already on disk)",
                self.sequence,
                self.path.display(),
                *last_written
            );
            return Ok(());
        }

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let tmp = temp_path(&self.path);

        let written = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(&self.bytes)?;
            file.sync_all()?;
            drop(file);
            std::fs::rename(&tmp, &self.path)
        })();

        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }

        sync_dir(&parent)?;

        *last_written = self.sequence;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("collection"));
    name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
    path.with_file_name(name)
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[async_trait]
impl<T> DurableStoreTrait<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let contents = match self.bounded(fs::read_to_string(&self.path)).await? {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "📂 No backing file at {}, starting empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<T>>(&contents) {
            Ok(records) => {
                info!(
                    "📂 Loaded {} records from {}",
                    records.len(),
                    self.path.display()
                );
                Ok(records)
            }
            Err(source) => match self.recovery {
                RecoveryMode::Lenient => {
                    warn!(
                        "⚠️ Discarding unreadable collection at {}: {source}",
                        self.path.display()
                    );
                    Ok(Vec::new())
                }
                RecoveryMode::Strict => Err(StoreError::Corrupted {
                    path: self.path.clone(),
                    source,
                }),
            },
        }
    }

    async fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        let abandoned = Arc::new(AtomicBool::new(false));
        let job = WriteJob {
            path: self.path.clone(),
            bytes: body.into_bytes(),
            sequence: self.sequence.fetch_add(1, Ordering::SeqCst) + 1,
            abandoned: abandoned.clone(),
            writer: self.writer.clone(),
        };

        let handle = tokio::task::spawn_blocking(move || job.run());

        let joined = match tokio::time::timeout(self.timeout, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                abandoned.store(true, Ordering::SeqCst);
                error!(
                    "❌ Write to {} timed out after {:?}",
                    self.path.display(),
                    self.timeout
                );
                return Err(self.timeout_error());
            }
        };

        joined
            .map_err(|e| self.io_error(io::Error::other(e)))?
            .map_err(|e| {
                error!(
                    "❌ Failed to write collection to {}: {e}",
                    self.path.display()
                );
                self.io_error(e)
            })?;

        info!(
            "💾 Persisted {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        qty: i64,
    }

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: "b".into(),
                qty: 2,
            },
            Item {
                id: "a".into(),
                qty: 1,
            },
        ]
    }

    fn store(path: PathBuf, recovery: RecoveryMode) -> JsonFileStore<Item> {
        JsonFileStore::new(path, recovery, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = store(dir.path().join("nope.json"), RecoveryMode::Strict);

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn persist_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let store = store(dir.path().join("items.json"), RecoveryMode::Strict);

        store.persist(&items()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), items());
    }

    #[tokio::test]
    async fn persist_replaces_previous_contents() {
        let dir = tempdir().unwrap();
        let store = store(dir.path().join("items.json"), RecoveryMode::Strict);

        store.persist(&items()).await.unwrap();
        store.persist(&items()[..1]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), items()[..1].to_vec());
    }

    #[tokio::test]
    async fn persist_leaves_no_temporary_files() {
        let dir = tempdir().unwrap();
        let store = store(dir.path().join("items.json"), RecoveryMode::Strict);

        store.persist(&items()).await.unwrap();
        store.persist(&items()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("items.json")]);
    }

    #[tokio::test]
    async fn persist_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("items.json");
        let store = store(path.clone(), RecoveryMode::Strict);

        store.persist(&items()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn written_file_is_a_pretty_json_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = store(path.clone(), RecoveryMode::Strict);

        store.persist(&items()).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], "b");
    }

    #[tokio::test]
    async fn corrupted_file_is_an_error_in_strict_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = store(path, RecoveryMode::Strict).load().await.unwrap_err();

        assert!(matches!(err, StoreError::Corrupted { .. }));
    }

    #[tokio::test]
    async fn corrupted_file_is_discarded_in_lenient_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = store(path, RecoveryMode::Lenient).load().await.unwrap();

        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn blank_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "  \n").unwrap();

        assert!(store(path, RecoveryMode::Strict).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_into_unwritable_location_is_an_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();
        let store = store(blocker.join("items.json"), RecoveryMode::Strict);

        let err = store.persist(&items()).await.unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
    }

    fn file_names(dir: &Path) -> Vec<OsString> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect()
    }

    #[tokio::test]
    async fn stalled_write_times_out_and_never_lands() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = JsonFileStore::<Item>::new(
            path.clone(),
            RecoveryMode::Strict,
            Duration::from_millis(200),
        );

        let writer = store.writer.clone();
        let held = writer.lock().unwrap();
        let err = store.persist(&items()).await.unwrap_err();
        drop(held);

        assert!(matches!(err, StoreError::Timeout { .. }));

        store.persist(&items()[..1]).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.load().await.unwrap(), items()[..1].to_vec());
        assert_eq!(file_names(dir.path()), vec![OsString::from("items.json")]);
    }

    #[test]
    fn older_write_does_not_replace_newer_collection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "newer").unwrap();

        WriteJob {
            path: path.clone(),
            bytes: b"older".to_vec(),
            sequence: 4,
            abandoned: Arc::new(AtomicBool::new(false)),
            writer: Arc::new(Mutex::new(5)),
        }
        .run()
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "newer");
        assert_eq!(file_names(dir.path()), vec![OsString::from("items.json")]);
    }

    #[test]
    fn write_job_records_its_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let writer = Arc::new(Mutex::new(0));

        WriteJob {
            path: path.clone(),
            bytes: b"[]".to_vec(),
            sequence: 1,
            abandoned: Arc::new(AtomicBool::new(false)),
            writer: writer.clone(),
        }
        .run()
        .unwrap();

        assert_eq!(*writer.lock().unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
