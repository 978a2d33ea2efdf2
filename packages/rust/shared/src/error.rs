//! Error types for webchurn.
//!
//! Library crates use [`WebchurnError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all webchurn operations.
#[derive(Debug, thiserror::Error)]
pub enum WebchurnError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching a page.
    #[error("network error: {0}")]
    Network(String),

    /// The document declares no title: there is no `<title>` element to
    /// match headlines against.
    #[error("document has no <title> element")]
    MissingTitleDeclaration,

    /// No level-1 heading shares a long enough run with the declared title.
    #[error("no headline matches the declared title")]
    NoHeadlineMatch,

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WebchurnError>;

impl WebchurnError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
