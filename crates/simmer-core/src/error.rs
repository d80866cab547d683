//! Error types for the simmer library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all simmer operations.
///
/// The cooking guide itself never fails; these errors come from loading
/// recipes and settings, interpreting voice transcripts and parsing AI
/// receipt output.
#[derive(Error, Debug)]
pub enum SimmerError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A voice transcript that matches no known command
    #[error("Command not recognized: '{command}'")]
    UnrecognizedCommand { command: String },
    /// A listening session is already active
    #[error("Speech recognition is already active")]
    AlreadyListening,
    /// AI receipt output that cannot be repaired into an item list
    #[error("Receipt format error: {message}")]
    ReceiptFormat { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SimmerError {
        SimmerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SimmerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a receipt format error.
    pub fn receipt_format(message: impl Into<String>) -> Self {
        SimmerError::ReceiptFormat {
            message: message.into(),
        }
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait IoResultExt<T> {
    /// Map an I/O error into [`SimmerError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| SimmerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for simmer operations
pub type Result<T> = std::result::Result<T, SimmerError>;
