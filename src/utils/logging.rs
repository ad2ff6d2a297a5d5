//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::types::{AppError, Result};
use crate::utils::config::LoggingConfig;

/// Where log lines go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error; used by line-oriented commands.
    Stderr,
    /// Dropped; used while the full-screen UI owns the terminal.
    Discard,
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    format!("pagepal={level},pagepal_core={level}")
}

/// Install the global subscriber. A configured log file always wins over `target`.
pub fn init_logging(config: &LoggingConfig, verbose: bool, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level, verbose)));

    let (writer, ansi) = match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, LogTarget::Stderr) => (BoxMakeWriter::new(std::io::stderr), true),
        (None, LogTarget::Discard) => (BoxMakeWriter::new(std::io::sink), false),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(verbose);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e)))
}
