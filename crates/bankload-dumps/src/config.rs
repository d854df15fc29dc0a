//! Dumps storage configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where seed results are persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpsBackend {
    #[default]
    File,
    Redis,
}

impl FromStr for DumpsBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown dumps backend '{other}'")),
        }
    }
}

/// Dumps configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SEEDS_DUMPS_BACKEND`: `file` or `redis` (default: `file`)
/// - `SEEDS_DUMPS_DIR`: Directory for file dumps (default: `dumps`)
/// - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
/// - `SEEDS_KEY_PREFIX`: Prefix for Redis keys (default: `bankload`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpsConfig {
    pub backend: DumpsBackend,
    pub dir: PathBuf,
    pub redis_url: String,
    pub key_prefix: String,
}

impl DumpsConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised backend falls back to `file`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env::var("SEEDS_DUMPS_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backend),
            dir: env::var("SEEDS_DUMPS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dir),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            key_prefix: env::var("SEEDS_KEY_PREFIX").unwrap_or(defaults.key_prefix),
        }
    }

    /// File-backed config rooted at `dir`.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: DumpsBackend::File,
            dir: dir.into(),
            ..Self::default()
        }
    }
}

impl Default for DumpsConfig {
    fn default() -> Self {
        Self {
            backend: DumpsBackend::File,
            dir: PathBuf::from("dumps"),
            redis_url: "redis://127.0.0.1:6379".into(),
            key_prefix: "bankload".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parses_case_insensitively() {
        assert_eq!("Redis".parse::<DumpsBackend>(), Ok(DumpsBackend::Redis));
        assert_eq!(" file ".parse::<DumpsBackend>(), Ok(DumpsBackend::File));
        assert!("s3".parse::<DumpsBackend>().is_err());
    }

    #[test]
    fn test_file_config_keeps_other_defaults() {
        let config = DumpsConfig::file("/tmp/seeds");
        assert_eq!(config.dir, PathBuf::from("/tmp/seeds"));
        assert_eq!(config.key_prefix, "bankload");
    }
}
