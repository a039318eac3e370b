//! Error types for MoDocs.
//!
//! Library crates use [`ModocsError`] via `thiserror`.
//! App crates (cli/tui) wrap this with `color-eyre` for rich diagnostics.
//!
//! User input errors (missing/short required fields) never travel through
//! this type — they are the validation map returned by `modocs-validation`.

use std::path::PathBuf;

/// Top-level error type for all MoDocs operations.
#[derive(Debug, thiserror::Error)]
pub enum ModocsError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Document store error (unreadable file, write failure, missing id).
    #[error("storage error: {0}")]
    Storage(String),

    /// Data validation error (schema mismatch, unknown field path, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Network error while talking to a PDF render endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// Export pipeline error (serialization, browser capture, etc.).
    #[error("export error: {0}")]
    Export(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ModocsError>;

impl ModocsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create an export error from any displayable message.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ModocsError::config("missing store path");
        assert_eq!(err.to_string(), "config error: missing store path");

        let err = ModocsError::validation("unknown field path: clientInfo.fax");
        assert!(err.to_string().contains("clientInfo.fax"));
    }
}
