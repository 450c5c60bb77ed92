// src/logging.rs
use std::io;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::Settings;

/// Rotated log files kept per prefix, the backup-count analog of the
/// appender's daily rolling.
const MAX_LOG_FILES: usize = 5;

/// Install the global subscriber: a console layer on stdout plus a rolling
/// file layer under the configured log path, both with the subscriber's
/// timestamped format.
///
/// Safe to call more than once. Returns `false` when a subscriber was
/// already installed and nothing changed, so repeated setup can never
/// duplicate output.
pub fn init(settings: &Settings) -> bool {
    let filter = env_filter(&settings.log_level);
    let console = fmt::layer().with_writer(io::stdout);

    match file_appender(&settings.log_file) {
        Some(appender) => {
            let file_layer = fmt::layer().with_ansi(false).with_writer(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file_layer)
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .try_init()
            .is_ok(),
    }
}

/// Console-only setup for callers that do not want a log file.
pub fn init_console(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_writer(io::stdout))
        .try_init()
        .is_ok()
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level.to_lowercase()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Rolling appender for `log_file`, creating its directory first. Failures
/// downgrade to console-only logging rather than aborting startup.
fn file_appender(log_file: &Path) -> Option<RollingFileAppender> {
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("log file disabled ({}): {e}", log_file.display());
        return None;
    }

    let stem = log_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("avm");
    let suffix = log_file
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("log");

    match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(stem)
        .filename_suffix(suffix)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
    {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("log file disabled ({}): {e}", log_file.display());
            None
        }
    }
}
