//! Error types.
//!
//! Lifecycle conditions (empty drops, duplicate opens, stale backdrops) are
//! not errors and never show up here. Only configuration and storage can
//! fail, and only the record container is fatal at startup.

use std::path::PathBuf;

use thiserror::Error;

/// Loading or saving the JSON config file failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid JSON for `AppConfig`
    #[error("Config parse error at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `AppConfig` could not be serialized for writing
    #[error("Config encode error for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No config directory could be determined for this user
    #[error("No config directory available")]
    NoConfigDir,
}

/// Opening or writing the record container failed.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Creating the data directory or touching the store failed
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record store exists but cannot be decoded
    #[error("Record store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding records failed
    #[error("Record encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// No data directory could be determined for this user
    #[error("No data directory available")]
    NoDataDir,
}

/// Anything that aborts startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to open record container: {0}")]
    Container(#[from] StorageError),

    /// The status bar did not hand out a button to attach to
    #[error("Status bar item has no button")]
    NoStatusButton,

    /// The app was started off the main thread
    #[error("Startup must run on the main thread")]
    NotMainThread,

    /// The current platform has no menu bar implementation
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),
}
