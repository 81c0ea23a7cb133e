//! Lindera tokenizer backend
//!
//! Uses lindera's embedded IPADIC dictionary for morphological analysis
//! when the `lindera` feature is enabled. Without the feature the backend
//! reports itself unavailable at construction time.

use crate::error::AnnotateError;
use crate::token::{TokenStream, TokenizeError, Tokenizer};

#[cfg(feature = "lindera")]
use crate::token::Token;
#[cfg(feature = "lindera")]
use lindera::dictionary::{load_embedded_dictionary, DictionaryKind};
#[cfg(feature = "lindera")]
use lindera::mode::Mode;
#[cfg(feature = "lindera")]
use lindera::segmenter::Segmenter;

/// IPADIC detail column holding the reading (読み), in katakana.
#[cfg(feature = "lindera")]
const READING_DETAIL: usize = 7;

/// Morphological tokenizer backed by lindera
pub struct LinderaTokenizer {
    #[cfg(feature = "lindera")]
    inner: lindera::tokenizer::Tokenizer,
}

impl LinderaTokenizer {
    /// Loads the embedded IPADIC dictionary and builds the tokenizer
    #[cfg(feature = "lindera")]
    pub fn new() -> Result<Self, AnnotateError> {
        let dictionary = load_embedded_dictionary(DictionaryKind::IPADIC)
            .map_err(|e| AnnotateError::TokenizerUnavailable(e.to_string()))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        let inner = lindera::tokenizer::Tokenizer::new(segmenter);
        Ok(Self { inner })
    }

    /// Always unavailable in builds without the `lindera` feature
    #[cfg(not(feature = "lindera"))]
    pub fn new() -> Result<Self, AnnotateError> {
        Err(AnnotateError::TokenizerUnavailable(
            "built without the `lindera` feature".to_string(),
        ))
    }
}

impl Tokenizer for LinderaTokenizer {
    #[cfg(feature = "lindera")]
    fn tokenize(&self, text: &str) -> Result<TokenStream<'_>, TokenizeError> {
        let raw = self
            .inner
            .tokenize(text)
            .map_err(|e| TokenizeError::with_trace("tokenization failed", e.to_string()))?;

        let tokens: Vec<Result<Token, TokenizeError>> = raw
            .into_iter()
            .map(|token| {
                // IPADIC marks missing fields with "*"; unknown words carry
                // a shorter detail vector with no reading column at all.
                let reading = token
                    .details
                    .as_ref()
                    .and_then(|details| details.get(READING_DETAIL))
                    .map(|reading| reading.to_string())
                    .filter(|reading| reading != "*");
                Ok(Token {
                    surface: token.surface.to_string(),
                    reading,
                })
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    #[cfg(not(feature = "lindera"))]
    fn tokenize(&self, _text: &str) -> Result<TokenStream<'_>, TokenizeError> {
        Err(TokenizeError::new("tokenizer backend not available"))
    }
}
