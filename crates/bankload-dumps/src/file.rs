//! Filesystem-backed dumps.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::error::DumpsError;
use crate::keys::{file_name, validate_key};
use crate::store::{DumpFuture, DumpStore};

/// Stores each record as `<dir>/<key>.json`.
///
/// Writes go to a hidden temporary file in the same directory and are then
/// renamed into place, so a record is either the old or the new contents.
#[derive(Clone, Debug)]
pub struct FileDumpStore {
    dir: PathBuf,
}

impl FileDumpStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(file_name(key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.tmp", file_name(key)))
    }
}

impl DumpStore for FileDumpStore {
    fn save<'a>(&'a self, key: &'a str, contents: &'a str) -> DumpFuture<'a, ()> {
        Box::pin(async move {
            validate_key(key)?;

            fs::create_dir_all(&self.dir).await?;

            let temp = self.temp_path(key);
            fs::write(&temp, contents).await?;
            fs::rename(&temp, self.path(key)).await?;

            debug!(dump.key = %key, dump.bytes = contents.len(), "Dump saved");
            Ok(())
        })
    }

    fn load<'a>(&'a self, key: &'a str) -> DumpFuture<'a, String> {
        Box::pin(async move {
            validate_key(key)?;

            match fs::read_to_string(self.path(key)).await {
                Ok(contents) => {
                    debug!(dump.key = %key, dump.bytes = contents.len(), "Dump loaded");
                    Ok(contents)
                }
                Err(e) if e.kind() == ErrorKind::NotFound => Err(DumpsError::NotFound {
                    key: key.to_string(),
                }),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn exists<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        Box::pin(async move {
            validate_key(key)?;
            Ok(fs::try_exists(self.path(key)).await?)
        })
    }

    fn delete<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        Box::pin(async move {
            validate_key(key)?;

            // Missing records are not an error
            match fs::remove_file(self.path(key)).await {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn location(&self, key: &str) -> String {
        self.path(key).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load_returns_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());

        store.save("scenario_a", r#"{"users":[]}"#).await.unwrap();

        assert_eq!(store.load("scenario_a").await.unwrap(), r#"{"users":[]}"#);
        assert!(store.exists("scenario_a").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());

        store.save("s", "first").await.unwrap();
        store.save("s", "second").await.unwrap();

        assert_eq!(store.load("s").await.unwrap(), "second");
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["s.json".to_string()]);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path().join("nested").join("dumps"));

        store.save("s", "x").await.unwrap();

        assert!(dir.path().join("nested/dumps/s.json").exists());
    }

    #[tokio::test]
    async fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());

        let err = store.load("nonexistent").await.unwrap_err();

        assert!(matches!(err, DumpsError::NotFound { key } if key == "nonexistent"));
        assert!(!store.exists("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_record_existed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());
        store.save("s", "x").await.unwrap();

        assert!(store.delete("s").await.unwrap());
        assert!(!store.delete("s").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_key_is_rejected_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDumpStore::new(dir.path());

        let err = store.save("../escape", "x").await.unwrap_err();

        assert!(matches!(err, DumpsError::InvalidKey(_)));
    }
}
