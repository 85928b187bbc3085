//! Optional tracing setup for the hosting application.
//!
//! The core only emits `tracing` events; installing a subscriber is the
//! shell's choice. This helper wires up the usual desktop setup: a
//! non-blocking file appender under the logs directory plus a stdout
//! layer, filtered via `RUST_LOG`.

use std::fs::OpenOptions;
use std::io::Write;

use tracing_subscriber::prelude::*;

/// Set up file and stdout logging. Call once at startup.
///
/// Returns the appender guard; keep it alive for the duration of the
/// program or buffered log lines are lost.
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = crate::paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory");
        return None;
    }

    let log_file_path = logs_dir.join("assetdesk.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    // Set up file appender
    let file_appender = tracing_appender::rolling::never(logs_dir, "assetdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Configure file layer (no ANSI colors for file output)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // Configure stdout layer (with ANSI colors)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    // Use env filter to control log levels (default to debug for assetdesk)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,assetdesk=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}
