//! Error handling for the education path pipeline.

/// Errors that can occur while loading datasets or configuration
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Error opening or reading an input file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing a JSON dataset
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error in the taxonomy configuration
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error with the shape of an input dataset
    #[error("Dataset error: {0}")]
    DatasetError(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PathError>;
