//! Error types for settings loading and event replay.
//!
//! The engine itself never fails: refused transitions are reported as
//! [`Transition::Ignored`](crate::engine::Transition::Ignored). Only the
//! ambient file-backed operations return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or watching settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error reading the settings file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for the settings schema
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Minimum box size must be finite and positive
    #[error("Invalid min_box_size: {0} (must be finite and > 0)")]
    InvalidMinSize(f64),

    /// File watcher could not be created
    #[error("Settings watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while loading a replay script
#[derive(Error, Debug)]
pub enum ReplayError {
    /// IO error reading the script
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script is not a valid JSON event list
    #[error("Replay script parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for replay operations
pub type ReplayResult<T> = Result<T, ReplayError>;
