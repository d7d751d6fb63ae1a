//! Error types for mdsweep operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across the mdsweep crates. Uses `thiserror` for derive macros.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while cleaning documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The supplied path is neither a Markdown file nor a directory.
    #[error("cannot process path: {}", .0.display())]
    InvalidPath(PathBuf),
}

impl Error {
    /// Create an invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Wrap a non-`std::io` error raised by a filesystem walk.
    pub fn io(err: impl std::error::Error) -> Self {
        Self::Io(std::io::Error::other(err.to_string()))
    }
}

/// Result type alias using mdsweep's Error type.
pub type Result<T> = std::result::Result<T, Error>;
