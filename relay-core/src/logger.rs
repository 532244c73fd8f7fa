//! Tracing setup for the bot process. Events go to stdout and are appended to a log file in the
//! same format: level, target, thread id, and a line when each span closes.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Opens `path` for appending, creating it and any missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// `RUST_LOG` if set and parseable, otherwise everything at `info` and above.
fn level_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Installs the global tracing subscriber, writing to stdout and to `log_file_path`.
///
/// Load `.env` before calling, otherwise a `RUST_LOG` defined there is not seen. Fails with
/// [`RelayBotError::Logger`](crate::RelayBotError::Logger) when a subscriber is already installed.
pub fn init_tracing(log_file_path: &str) -> Result<()> {
    let log_file = Arc::new(open_log_file(Path::new(log_file_path))?);
    let writer = io::stdout.and(log_file);

    tracing_subscriber::registry()
        .with(level_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()?;
    Ok(())
}
