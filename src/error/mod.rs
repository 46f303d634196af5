//! Error handling for the diagnosis pipeline.
//!
//! Only batch-level failures surface as a [`DxError`]. Records without any
//! recognizable symptoms are tallied by the pipeline instead, and missing
//! reference fields are replaced by placeholders.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for the diagnosis pipeline
#[derive(Debug, thiserror::Error)]
pub enum DxError {
    /// Error opening, reading or writing a file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error parsing or writing CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error parsing JSON data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required input (reference table or patient file) is absent or empty
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// An input file does not have the expected columns or structure
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DxError {
    /// Wrap an IO error together with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Shorthand for a [`DxError::MissingInput`]
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// Shorthand for a [`DxError::Schema`]
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Whether this error means an input was absent or empty
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }
}

/// Result type for diagnosis operations
pub type Result<T> = std::result::Result<T, DxError>;
