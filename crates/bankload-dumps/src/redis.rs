//! Redis-backed dumps.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::debug;

use crate::error::DumpsError;
use crate::keys::{redis_key, validate_key};
use crate::store::{DumpFuture, DumpStore};

/// Stores each record as a Redis string under `<prefix>:seeds:<key>`.
///
/// Records never expire.
#[derive(Clone)]
pub struct RedisDumpStore {
    conn: ConnectionManager,
    prefix: String,
}

impl std::fmt::Debug for RedisDumpStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisDumpStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl RedisDumpStore {
    /// Connects to `redis_url`.
    ///
    /// # Errors
    ///
    /// Returns `DumpsError::Redis` if the connection fails.
    pub async fn connect(redis_url: &str, prefix: &str) -> Result<Self, DumpsError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            prefix: prefix.to_string(),
        })
    }

    fn key(&self, key: &str) -> String {
        redis_key(&self.prefix, key)
    }
}

impl DumpStore for RedisDumpStore {
    fn save<'a>(&'a self, key: &'a str, contents: &'a str) -> DumpFuture<'a, ()> {
        Box::pin(async move {
            validate_key(key)?;
            let mut conn = self.conn.clone();

            conn.set::<_, _, ()>(self.key(key), contents).await?;

            debug!(dump.key = %key, dump.bytes = contents.len(), "Dump saved");
            Ok(())
        })
    }

    fn load<'a>(&'a self, key: &'a str) -> DumpFuture<'a, String> {
        Box::pin(async move {
            validate_key(key)?;
            let mut conn = self.conn.clone();

            match conn.get::<_, Option<String>>(self.key(key)).await? {
                Some(contents) => {
                    debug!(dump.key = %key, "Dump loaded");
                    Ok(contents)
                }
                None => Err(DumpsError::NotFound {
                    key: key.to_string(),
                }),
            }
        })
    }

    fn exists<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        Box::pin(async move {
            validate_key(key)?;
            let mut conn = self.conn.clone();
            Ok(conn.exists::<_, bool>(self.key(key)).await?)
        })
    }

    fn delete<'a>(&'a self, key: &'a str) -> DumpFuture<'a, bool> {
        Box::pin(async move {
            validate_key(key)?;
            let mut conn = self.conn.clone();
            let removed: u64 = conn.del(self.key(key)).await?;
            Ok(removed > 0)
        })
    }

    fn location(&self, key: &str) -> String {
        format!("redis key {}", self.key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_round_trip_against_local_redis() {
        let store = RedisDumpStore::connect("redis://127.0.0.1:6379", "bankload-test")
            .await
            .unwrap();

        store.save("redis_round_trip", "payload").await.unwrap();
        assert_eq!(store.load("redis_round_trip").await.unwrap(), "payload");
        assert!(store.delete("redis_round_trip").await.unwrap());
        assert!(matches!(
            store.load("redis_round_trip").await.unwrap_err(),
            DumpsError::NotFound { .. }
        ));
    }
}
