pub mod app_config;
pub mod snapshot;

pub use snapshot::{JsonFileStore, MemoryStore, SnapshotKey, SnapshotStore, StoreError};
