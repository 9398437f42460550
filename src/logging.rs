//! File-based logging for the client
//!
//! Logs go to a daily rotating file rather than stdout, since the command-line
//! front end prints its results as JSON on stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "spotify-client";
const DEFAULT_FILTER: &str = "spotify_client=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/spotify-client.YYYY-MM-DD.log` with daily
/// rotation. The level can be controlled via the `RUST_LOG` environment
/// variable.
///
/// Default log levels:
/// - `spotify_client` modules: DEBUG
/// - `reqwest`: INFO
/// - Other crates: WARN
///
/// Session tokens are never logged.
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop; the process exits right after the command
    // finishes, so it lives for the rest of the program.
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Log the outcome of an API call
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::debug!(operation = $operation, "API request successful"),
            Err(e) => tracing::warn!(operation = $operation, error = %e, "API request failed"),
        }
    };
}

/// Log an API request with additional context
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "API request started");
    };
}

