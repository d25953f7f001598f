//! Error types for pastex library.
//!
//! The cleaning and conversion pipelines never fail. Errors only come from the
//! collaborator layer: clipboard reads, the settings store, and FFI input.

use std::io;
use thiserror::Error;

/// Result type alias for pastex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pastex library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Settings or bundle JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform has no configuration directory.
    #[error("No config directory available on this platform")]
    NoConfigDir,

    /// The platform clipboard could not be read.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Caller supplied unusable input (bad UTF-8, null pointer, unknown key).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}
