//! # Bankload Observability
//!
//! Logging setup shared by the seeder binary and the load runner.
//!
//! - **Console**: compact, colored, filtered by `RUST_LOG` or `LOG_LEVEL`
//! - **JSON file**: enabled by `LOG_DIR`, rotated daily
//!
//! # Example
//!
//! ```ignore
//! bankload_observability::init_tracing();
//! tracing::info!(scenario = %name, "Seeding scenario");
//! ```

use std::path::Path;

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose debug output drowns out ours.
const QUIET_DEPENDENCIES: &str = "hyper=warn,hyper_util=warn,reqwest=warn,redis=warn,h2=warn";

/// Builds the console filter.
///
/// `RUST_LOG` wins when set and valid; otherwise `LOG_LEVEL` (default
/// `info`) applies to everything except [`QUIET_DEPENDENCIES`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(format!("{log_level},{QUIET_DEPENDENCIES}"))
    })
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case
/// nothing changes. Tests may call this freely.
pub fn init_tracing() -> bool {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter());

    // JSON file layer for structured logs (can be ingested by Loki)
    let json_layer = std::env::var("LOG_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .and_then(|dir| match json_file_layer(Path::new(&dir)) {
            Ok(layer) => Some(layer),
            Err(e) => {
                // Subscriber is not up yet, so report on stderr
                eprintln!("Failed to open JSON log file in {dir}: {e}. Logging to console only");
                None
            }
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .is_ok()
}

fn json_file_layer<S>(dir: &Path) -> Result<impl Layer<S> + use<S>, InitError>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("bankload")
        .filename_suffix("json")
        .build(dir)?;

    Ok(fmt::layer()
        .json()
        .with_writer(appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(env_filter()))
}
