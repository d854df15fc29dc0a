//! # Bankload Config
//!
//! Configuration types loaded from environment variables:
//!
//! - [`gateway`]: HTTP gateway client configuration
//! - [`load`]: Simulated-user load run configuration
//!
//! # Example
//!
//! ```ignore
//! use bankload_config::{GatewayHttpConfig, LoadConfig};
//!
//! dotenvy::dotenv().ok();
//! let gateway = GatewayHttpConfig::from_env();
//! let load = LoadConfig::from_env();
//! ```

pub mod gateway;
pub mod load;

pub use gateway::GatewayHttpConfig;
pub use load::LoadConfig;

/// Reads and parses an environment variable, falling back to `default` when it
/// is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
