use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::DumpsError;
use crate::keys::validate_key;
use crate::store::{DumpFuture, DumpStore};

/// Process-local store. Records are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryDumpStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryDumpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_records<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut records)
    }
}

impl DumpStore for MemoryDumpStore {
    fn save<'a>(&'a self, key: &'a str, contents: &'a str) -> DumpFuture<'a, ()> {
        let result = validate_key(key).map(|()| {
            self.with_records(|records| records.insert(key.to_string(), contents.to_string()));
        });
        Box::pin(std::future::ready(result))
    }

    fn load<'a>(&'a self, key: &'a str) -> DumpFuture<'a, String> {
        let result = validate_key(key).and_then(|()| {
            self.with_records(|records| records.get(key).cloned())
                .ok_or_else(|| DumpsError::NotFound {
                    key: key.to_string(),
                })
        });
        Box::pin(std::future::ready(result))
    }

    fn exists<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        let result =
            validate_key(key).map(|()| self.with_records(|records| records.contains_key(key)));
        Box::pin(std::future::ready(result))
    }

    fn delete<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        let result =
            validate_key(key).map(|()| self.with_records(|records| records.remove(key).is_some()));
        Box::pin(std::future::ready(result))
    }

    fn location(&self, key: &str) -> String {
        format!("memory:{key}")
    }
}
