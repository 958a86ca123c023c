//! Error types for coordinate-file I/O

use thiserror::Error;

/// Errors that can occur while reading coordinate files
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with location information
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based)
        line: usize,
        /// Error message
        message: String,
    },

    /// File is empty or contains no coordinate records
    #[error("Empty file or no coordinate records found")]
    EmptyFile,
}

impl IoError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for coordinate-file I/O operations
pub type IoResult<T> = Result<T, IoError>;
