use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the CDR analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but its bytes are not valid UTF-8 text.
    #[error("File is not valid UTF-8 text: {0}")]
    Decode(PathBuf),

    /// The requested file or directory does not exist.
    #[error("Path not found: {0}")]
    RootNotFound(PathBuf),

    /// Directory traversal failed (permission denied, symlink loop, ...).
    #[error("Directory walk error: {0}")]
    Walk(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A result could not be serialised to JSON.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
