use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// The three fixed snapshot slots. Key names match the original storage
/// identifiers so existing data files keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Trips,
    Expenses,
    PaymentMethods,
}

impl SnapshotKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKey::Trips => "travel_trips",
            SnapshotKey::Expenses => "travel_expenses",
            SnapshotKey::PaymentMethods => "travel_payment_methods",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Snapshot I/O failed for {key}: {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-collection snapshot persistence. No partial updates, no
/// transactions: callers write the full serialized collection every time.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, key: SnapshotKey) -> Result<Option<String>, StoreError>;
    async fn save(&self, key: SnapshotKey, payload: &str) -> Result<(), StoreError>;
}

/// Snapshot store backed by one JSON file per key under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: SnapshotKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self, key: SnapshotKey) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                key: key.as_str(),
                source: e,
            }),
        }
    }

    async fn save(&self, key: SnapshotKey, payload: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Io {
                key: key.as_str(),
                source: e,
            })?;
        tokio::fs::write(self.path_for(key), payload)
            .await
            .map_err(|e| StoreError::Io {
                key: key.as_str(),
                source: e,
            })?;
        debug!("Snapshot written: {} ({} bytes)", key.as_str(), payload.len());
        Ok(())
    }
}

/// In-memory snapshot store. Backs tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: SnapshotKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key.as_str()).cloned())
    }

    async fn save(&self, key: SnapshotKey, payload: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.as_str(), payload.to_string());
        Ok(())
    }
}
