//! Error types for quote document handling.
//!
//! The calculators and the cutting optimizer never fail; only loading and
//! saving quote documents can.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for document processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed JSON document (-3)
    ParseError = -3,
    /// Document written by an incompatible schema version (E300)
    UnsupportedVersion = 300,
}

/// Main error type for quote documents.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid quote document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document version '{found}' (this build reads {supported}.x)")]
    UnsupportedVersion { found: String, supported: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::Json(_) => ErrorCode::ParseError,
            QuoteError::UnsupportedVersion { .. } => ErrorCode::UnsupportedVersion,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
