use std::io;
use std::path::PathBuf;

/// Custom error type for the fontface library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Base URL could not be parsed or cannot carry path segments
    #[error("Invalid base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Definitions serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fontface operations
pub type Result<T> = std::result::Result<T, Error>;
