//! Furigana annotation units for syllable-level timing alignment
//!
//! Given tokens (surface form plus an optional katakana reading) from a
//! morphological analyzer, this crate decides how kanji-bearing words split
//! into aligned (surface, furigana) units: trailing kana shared between the
//! surface and its reading become single-character units a karaoke timing
//! engine can target, while the kanji root keeps the remaining reading.
//!
//! The analyzer itself is a black box behind the [`Tokenizer`] trait; the
//! bundled [`LinderaTokenizer`] backend is available with the `lindera`
//! feature.

#![warn(missing_docs)]

pub mod annotate;
pub mod batch;
pub mod error;
pub mod lindera;
pub mod script;
pub mod split;
pub mod token;

pub use self::annotate::{Annotator, Unit};
pub use self::batch::{annotate_batch, parse_batch_input, BatchResult, TextResult};
pub use self::error::{AnnotateError, Result};
pub use self::lindera::LinderaTokenizer;
pub use self::script::{contains_kanji, katakana_to_hiragana};
pub use self::split::split_okurigana;
pub use self::token::{Token, TokenStream, TokenizeError, Tokenizer};

/// Annotates one text with the default lindera backend.
///
/// Convenience wrapper that builds a fresh [`LinderaTokenizer`]; reuse an
/// [`Annotator`] when annotating many texts.
pub fn annotate_text(text: &str) -> Result<Vec<Unit>> {
    let annotator = Annotator::new(LinderaTokenizer::new()?);
    annotator.annotate(text)
}
