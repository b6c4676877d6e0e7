//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Non-blocking writes so the frame loop never stalls on log IO
/// - Filter from `RUST_LOG`, falling back to the configured default
///
/// Logs are written to `logs/banter-client.log` by default. Returns the
/// writer guard; dropping it flushes and stops the background writer, so
/// `main` holds it for the lifetime of the process.
pub fn init(config: &AppConfig) -> Option<WorkerGuard> {
    // Create logs directory if it doesn't exist
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "banter-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure log filter from environment
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("client=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // First line proves the appender works before the window opens
    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_filter = %config.log_filter,
        "Logging initialized"
    );

    Some(guard)
}
