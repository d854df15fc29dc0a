//! Storage backend abstraction.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::info;

use crate::config::{DumpsBackend, DumpsConfig};
use crate::error::DumpsError;
use crate::file::FileDumpStore;
use crate::redis::RedisDumpStore;

pub type DumpFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DumpsError>> + Send + 'a>>;

/// A key-addressed store of text records.
///
/// Implementations can be swapped without changing callers.
pub trait DumpStore: Send + Sync {
    /// Stores `contents` under `key`, replacing any previous record.
    fn save<'a>(&'a self, key: &'a str, contents: &'a str) -> DumpFuture<'a, ()>;

    /// Returns the record under `key`, or [`DumpsError::NotFound`].
    fn load<'a>(&'a self, key: &'a str) -> DumpFuture<'a, String>;

    fn exists<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool>;

    /// Removes the record under `key`. Returns whether one existed.
    fn delete<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool>;

    /// Human-readable location of the record, for logs and CLI output.
    fn location(&self, key: &str) -> String;
}

/// Opens the backend selected by `config`.
pub async fn open_store(config: &DumpsConfig) -> Result<Arc<dyn DumpStore>, DumpsError> {
    match config.backend {
        DumpsBackend::File => {
            info!(dir = %config.dir.display(), "Using file dumps");
            Ok(Arc::new(FileDumpStore::new(config.dir.clone())))
        }
        DumpsBackend::Redis => {
            info!(prefix = %config.key_prefix, "Using Redis dumps");
            let store = RedisDumpStore::connect(&config.redis_url, &config.key_prefix).await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_store_defaults_to_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&DumpsConfig::file(dir.path())).await.unwrap();

        store.save("s1", "{}").await.unwrap();

        assert!(dir.path().join("s1.json").exists());
        assert!(store.location("s1").ends_with("s1.json"));
    }
}
