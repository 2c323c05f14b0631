//! Error types for the web front end.

use thiserror::Error;

/// Result type for web server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the server from starting or running.
///
/// Rejected lookups are not errors here; they travel back to the client as
/// validation outcomes.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
