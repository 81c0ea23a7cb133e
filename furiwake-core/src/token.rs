//! Tokenizer abstraction
//!
//! The morphological analyzer is a black box behind the [`Tokenizer`]
//! trait: text in, an ordered stream of surface/reading pairs out. The
//! stream is lazy, finite and consumed exactly once per call; nothing else
//! is assumed about the backend.

use thiserror::Error;

/// One morphological unit of input text, as produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The as-written form of the unit.
    pub surface: String,
    /// Full phonetic reading of the surface (katakana), when the backend
    /// knows it.
    pub reading: Option<String>,
}

impl Token {
    /// Creates a token with a known reading.
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: Some(reading.into()),
        }
    }

    /// Creates a token the backend has no reading for.
    pub fn without_reading(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: None,
        }
    }
}

/// Error raised by a tokenizer backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TokenizeError {
    /// What went wrong.
    pub message: String,
    /// Backend diagnostic detail, when available.
    pub trace: Option<String>,
}

impl TokenizeError {
    /// Creates an error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Creates an error carrying backend diagnostic detail.
    pub fn with_trace(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Some(trace.into()),
        }
    }
}

/// Ordered, lazily produced token stream for one text.
pub type TokenStream<'a> = Box<dyn Iterator<Item = std::result::Result<Token, TokenizeError>> + 'a>;

/// A morphological analyzer capability.
///
/// Injected into the annotation pipeline explicitly; availability is
/// decided when the implementation is constructed, not through ambient
/// state.
pub trait Tokenizer {
    /// Tokenizes one text into surface/reading pairs, in input order.
    fn tokenize(&self, text: &str) -> std::result::Result<TokenStream<'_>, TokenizeError>;
}
