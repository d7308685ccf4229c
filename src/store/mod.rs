//! On-device persistence: an opaque string key-value store plus typed
//! repositories that own the key-naming conventions.

mod file;
mod memory;
mod repos;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repos::{
    ActivityStore, ChatLog, CheckInStore, JournalStore, MoodStore, PointsLedger, ProfileStore,
    SurveyStore,
};

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque string store. Values are serialized records; keys are an
/// implementation detail of the repositories in this module.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
