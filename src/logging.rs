//! Dual-output tracing setup: pretty stderr for developers, JSONL file for
//! tooling. Filtering is controlled by the `TAB_OMNIBAR_LOG` env var
//! (defaults to `info`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keep this alive for the duration of the program; dropping it flushes and
/// closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Log directory: `~/.tab-omnibar/logs`.
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tab-omnibar")
        .join("logs")
}

/// Initialize logging. Safe to call more than once; later calls keep the
/// first subscriber.
pub fn init() -> LoggingGuard {
    let env_filter = EnvFilter::try_from_env("TAB_OMNIBAR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let dir = log_dir();
    let file = fs::create_dir_all(&dir).ok().and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("tab-omnibar.jsonl"))
            .ok()
    });

    let (file_layer, file_guard) = match file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(false);
            (Some(layer), Some(guard))
        }
        None => {
            eprintln!("[tab-omnibar] could not open log file, logging to stderr only");
            (None, None)
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    LoggingGuard {
        _file_guard: file_guard,
    }
}
