//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{BinaryTrieError, BinaryTrieResult};

/// Installs a global `tracing` subscriber configured by `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Output goes to
/// stderr unless `config.file` names a file, which is appended to.
///
/// # Errors
///
/// * `Io` - if the log file cannot be opened.
/// * `Logging` - if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> BinaryTrieResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_writer(writer);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| BinaryTrieError::Logging(e.to_string()))?;
    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}
