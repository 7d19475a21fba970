//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during module discovery
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid scan path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Errors that can occur while resolving the probe runtime
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Invalid python executable: {}", .0.display())]
    InvalidExecutable(PathBuf),

    #[error("Invalid env file: {}", .0.display())]
    InvalidEnvFile(PathBuf),

    #[error("No python interpreter found (tried a project venv and {0} on PATH)")]
    InterpreterNotFound(String),

    #[error("Failed to read env file {}: {source}", path.display())]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while reading the scan cache
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache not found. Run `coldimport scan <path>` first.")]
    NotFound(PathBuf),

    #[error("Cache file is not valid JSON: {}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cache format is invalid: {} ({reason})", path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Failed to read cache {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
