use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Send `tracing` output to the configured log file.
///
/// Logging is best effort: when the file cannot be opened the player runs
/// without it. Keep the returned guard alive until exit so buffered lines
/// are flushed.
pub fn init_logging(log: &LogSettings) -> Option<WorkerGuard> {
    let Some(file_name) = log.file.file_name() else {
        eprintln!("cadenza: log.file has no file name, logging disabled");
        return None;
    };
    let dir = log
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
    {
        Ok(a) => a,
        Err(e) => {
            eprintln!("cadenza: cannot open log file, logging disabled: {e}");
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cadenza: logging already initialized: {e}");
        return None;
    }

    Some(guard)
}
