//! Library error types

use crate::token::TokenizeError;
use thiserror::Error;

/// Errors produced while annotating text
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// The morphological analyzer backend could not be loaded
    #[error("tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),

    /// Annotating a single text failed
    #[error("annotation failed: {message}")]
    AnnotationFailed {
        /// Human-readable description of the failure
        message: String,
        /// Backend diagnostic detail, when available
        trace: Option<String>,
    },

    /// Batch input was not a JSON array of strings
    #[error("invalid batch input: {0}")]
    InvalidBatchInput(String),
}

impl From<TokenizeError> for AnnotateError {
    fn from(err: TokenizeError) -> Self {
        AnnotateError::AnnotationFailed {
            message: err.message,
            trace: err.trace,
        }
    }
}

/// Result type for annotation operations
pub type Result<T> = std::result::Result<T, AnnotateError>;
