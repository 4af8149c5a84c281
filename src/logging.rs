//! Logging setup
//!
//! Standard output carries the JSON summary, so every log line goes to
//! stderr through a non-blocking writer. The level is taken from `RUST_LOG`
//! and defaults to [`DEFAULT_LOG_LEVEL`].

use std::io::{self, IsTerminal};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::{DEFAULT_LOG_LEVEL, LogFormat};

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes pending log lines to stderr.
pub struct LoggingGuard {
    _stderr_guard: WorkerGuard,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed
pub fn init_logging(format: LogFormat) -> Result<LoggingGuard, TryInitError> {
    let (writer, guard) = tracing_appender::non_blocking(io::stderr());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false);

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.with_ansi(io::stderr().is_terminal()))
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json().with_ansi(false))
            .try_init()?,
    }

    Ok(LoggingGuard {
        _stderr_guard: guard,
    })
}
