//! Log file setup
//!
//! The terminal belongs to the UI, so log lines go to a file in the
//! OS-standard data directory:
//! - Linux: `$XDG_DATA_HOME/hangman/` or `~/.local/share/hangman/`
//! - macOS: `~/Library/Application Support/hangman/`

use directories::ProjectDirs;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `hangman=debug`
pub const LOG_ENV: &str = "HANGMAN_LOG";

const LOG_FILE: &str = "hangman.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("failed to open log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Get the OS-standard data directory for hangman
pub fn data_dir() -> Result<PathBuf, LoggingError> {
    ProjectDirs::from("", "", "hangman")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(LoggingError::NoDataDirectory)
}

/// `HANGMAN_LOG` when set, otherwise `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default_level.to_string(),
    };
    Ok(EnvFilter::try_new(directives)?)
}

/// Install the global subscriber; returns the log file path
pub fn init(default_level: &str) -> Result<PathBuf, LoggingError> {
    let filter = build_filter(default_level)?;

    let dir = data_dir()?;
    fs::create_dir_all(&dir).map_err(|source| LoggingError::Io {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(LOG_FILE);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(path)
}
