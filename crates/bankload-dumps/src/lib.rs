//! # Bankload Dumps
//!
//! Durable, key-addressed storage for seed results. A record is an opaque
//! UTF-8 document stored under a scenario name; callers own the encoding.
//!
//! Backends:
//! - [`FileDumpStore`]: one `<key>.json` file per record in a directory
//! - [`RedisDumpStore`]: one Redis string per record under a prefixed key
//! - [`MemoryDumpStore`]: process-local map, for tests
//!
//! # Example
//!
//! ```ignore
//! use bankload_dumps::{DumpsConfig, open_store};
//!
//! let store = open_store(&DumpsConfig::from_env()).await?;
//! store.save("existing_user_get_operations", &json).await?;
//! let json = store.load("existing_user_get_operations").await?;
//! ```

pub mod config;
pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod redis;
pub mod store;

pub use config::{DumpsBackend, DumpsConfig};
pub use error::DumpsError;
pub use file::FileDumpStore;
pub use memory::MemoryDumpStore;
pub use crate::redis::RedisDumpStore;
pub use store::{DumpFuture, DumpStore, open_store};
