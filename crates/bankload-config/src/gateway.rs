use std::env;
use std::time::Duration;

use crate::env_or;

/// HTTP gateway client configuration.
///
/// # Environment Variables
///
/// - `GATEWAY_HTTP_CLIENT_URL`: Base URL of the http-gateway (default: `http://localhost:8003`)
/// - `GATEWAY_HTTP_TIMEOUT_SECONDS`: Per-request timeout (default: `100`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayHttpConfig {
    pub client_url: String,
    pub timeout: Duration,
}

impl GatewayHttpConfig {
    pub fn from_env() -> Self {
        Self {
            client_url: env::var("GATEWAY_HTTP_CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:8003".into()),
            timeout: Duration::from_secs(env_or("GATEWAY_HTTP_TIMEOUT_SECONDS", 100)),
        }
    }

    /// Config pointing at an explicit base URL, e.g. a local test server.
    pub fn with_url(client_url: impl Into<String>) -> Self {
        Self {
            client_url: client_url.into(),
            ..Self::default()
        }
    }
}

impl Default for GatewayHttpConfig {
    fn default() -> Self {
        Self {
            client_url: "http://localhost:8003".into(),
            timeout: Duration::from_secs(100),
        }
    }
}
