use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KvStore, StoreResult};

/// Key-value store persisted to a single JSON file. The whole map is held
/// in memory; every mutation is flushed through a temp-file rename.
pub struct FileStore {
    path: PathBuf,
    map: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Loads the data file, starting empty if it is missing or unreadable.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Data file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read data file, starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            map: RwLock::new(map),
        }
    }

    async fn flush(&self, map: &HashMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        // Write lock held across the flush so writers serialize
        let mut map = self.map.write().await;
        map.insert(key.to_string(), value.to_string());
        self.flush(&map).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut map = self.map.write().await;
        map.remove(key);
        self.flush(&map).await
    }
}
