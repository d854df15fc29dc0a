/// Error type for dump storage operations.
#[derive(Debug, thiserror::Error)]
pub enum DumpsError {
    #[error("No dump stored under '{key}'")]
    NotFound { key: String },

    #[error("Invalid dump key: {0}")]
    InvalidKey(String),

    #[error("Dump I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
}
