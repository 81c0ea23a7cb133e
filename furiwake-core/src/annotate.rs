//! Annotation pipeline
//!
//! Consumes the tokenizer's surface/reading stream for one text and turns
//! it into an ordered sequence of aligned (surface, furigana) units.

use crate::error::{AnnotateError, Result};
use crate::script::{contains_kanji, katakana_to_hiragana};
use crate::split::split_okurigana;
use crate::token::Tokenizer;
use serde::{Deserialize, Serialize};

/// One aligned (surface, furigana) output unit.
///
/// Units are immutable once produced. Concatenating the `surface` fields of
/// a text's units, in order, reproduces the tokenizer's surface stream for
/// that text; a single-character unit is a syllable a timing engine can
/// target directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// The as-written segment of the input text.
    pub surface: String,
    /// The phonetic reading displayed for the segment.
    pub furigana: String,
}

impl Unit {
    /// Creates a unit from a surface and its furigana.
    pub fn new(surface: impl Into<String>, furigana: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            furigana: furigana.into(),
        }
    }

    /// Creates a unit whose furigana is the surface itself (kana, Latin,
    /// punctuation, whitespace, or kanji the tokenizer had no reading for).
    pub fn passthrough(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            furigana: surface.clone(),
            surface,
        }
    }
}

/// Annotates texts with furigana units using an injected tokenizer.
pub struct Annotator<T: Tokenizer> {
    tokenizer: T,
}

impl<T: Tokenizer> Annotator<T> {
    /// Creates an annotator around a tokenizer capability.
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Annotates one text, producing its ordered unit sequence.
    ///
    /// Empty text yields an empty sequence without consulting the
    /// tokenizer. Whitespace tokens are preserved as pass-through units so
    /// that downstream timing data stays aligned syllable for syllable;
    /// only tokens with an empty surface are skipped. Any failure while
    /// producing or consuming the token stream is returned as
    /// [`AnnotateError::AnnotationFailed`] — it never propagates past this
    /// method.
    pub fn annotate(&self, text: &str) -> Result<Vec<Unit>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let stream = self.tokenizer.tokenize(text).map_err(AnnotateError::from)?;

        let mut units = Vec::new();
        for token in stream {
            let token = token.map_err(AnnotateError::from)?;
            if token.surface.is_empty() {
                continue;
            }

            match &token.reading {
                Some(reading) if !reading.is_empty() && contains_kanji(&token.surface) => {
                    let normalized = katakana_to_hiragana(reading);
                    units.extend(split_okurigana(&token.surface, &normalized));
                }
                _ => units.push(Unit::passthrough(token.surface)),
            }
        }
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenStream, TokenizeError};

    /// Scripted tokenizer: replays a fixed token list for any text.
    struct ScriptedTokenizer {
        tokens: Vec<Token>,
    }

    impl ScriptedTokenizer {
        fn new(tokens: Vec<Token>) -> Self {
            Self { tokens }
        }
    }

    impl Tokenizer for ScriptedTokenizer {
        fn tokenize(&self, _text: &str) -> std::result::Result<TokenStream<'_>, TokenizeError> {
            Ok(Box::new(self.tokens.clone().into_iter().map(Ok)))
        }
    }

    /// Tokenizer whose stream fails partway through.
    struct FailingTokenizer;

    impl Tokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> std::result::Result<TokenStream<'_>, TokenizeError> {
            let items = vec![
                Ok(Token::new("猫", "ネコ")),
                Err(TokenizeError::with_trace("lattice overflow", "node 7")),
            ];
            Ok(Box::new(items.into_iter()))
        }
    }

    fn pairs(units: &[Unit]) -> Vec<(&str, &str)> {
        units
            .iter()
            .map(|u| (u.surface.as_str(), u.furigana.as_str()))
            .collect()
    }

    #[test]
    fn empty_text_is_an_empty_result() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![Token::new("猫", "ネコ")]));
        assert_eq!(annotator.annotate("").unwrap(), Vec::new());
    }

    #[test]
    fn kanji_token_with_reading_is_split() {
        let annotator =
            Annotator::new(ScriptedTokenizer::new(vec![Token::new("食べる", "タベル")]));
        let units = annotator.annotate("食べる").unwrap();
        assert_eq!(
            pairs(&units),
            vec![("食", "た"), ("べ", "べ"), ("る", "る")]
        );
    }

    #[test]
    fn kana_token_passes_through() {
        let annotator =
            Annotator::new(ScriptedTokenizer::new(vec![Token::new("ねこ", "ネコ")]));
        let units = annotator.annotate("ねこ").unwrap();
        assert_eq!(pairs(&units), vec![("ねこ", "ねこ")]);
    }

    #[test]
    fn kanji_token_without_reading_passes_through() {
        let annotator =
            Annotator::new(ScriptedTokenizer::new(vec![Token::without_reading("齾")]));
        let units = annotator.annotate("齾").unwrap();
        assert_eq!(pairs(&units), vec![("齾", "齾")]);
    }

    #[test]
    fn kanji_token_with_empty_reading_passes_through() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![Token::new("猫", "")]));
        let units = annotator.annotate("猫").unwrap();
        assert_eq!(pairs(&units), vec![("猫", "猫")]);
    }

    #[test]
    fn whitespace_tokens_are_preserved() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![
            Token::new("歌", "ウタ"),
            Token::without_reading(" "),
            Token::without_reading("lyrics"),
        ]));
        let units = annotator.annotate("歌 lyrics").unwrap();
        assert_eq!(
            pairs(&units),
            vec![("歌", "うた"), (" ", " "), ("lyrics", "lyrics")]
        );
    }

    #[test]
    fn empty_surface_tokens_are_skipped() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![
            Token::without_reading(""),
            Token::new("犬", "イヌ"),
        ]));
        let units = annotator.annotate("犬").unwrap();
        assert_eq!(pairs(&units), vec![("犬", "いぬ")]);
    }

    #[test]
    fn latin_and_punctuation_pass_through() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![
            Token::without_reading("OK"),
            Token::without_reading("、"),
            Token::new("！", "！"),
        ]));
        let units = annotator.annotate("OK、！").unwrap();
        assert_eq!(
            pairs(&units),
            vec![("OK", "OK"), ("、", "、"), ("！", "！")]
        );
    }

    #[test]
    fn stream_failure_becomes_annotation_failure() {
        let annotator = Annotator::new(FailingTokenizer);
        let error = annotator.annotate("猫だ").unwrap_err();
        match error {
            AnnotateError::AnnotationFailed { message, trace } => {
                assert_eq!(message, "lattice overflow");
                assert_eq!(trace.as_deref(), Some("node 7"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn annotation_is_idempotent_for_identical_tokenizer_output() {
        let annotator = Annotator::new(ScriptedTokenizer::new(vec![
            Token::new("向かえ", "ムカエ"),
            Token::without_reading("に"),
        ]));
        let first = annotator.annotate("向かえに").unwrap();
        let second = annotator.annotate("向かえに").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn surfaces_concatenate_to_token_stream() {
        let tokens = vec![
            Token::new("向かえ", "ムカエ"),
            Token::without_reading("に"),
            Token::new("行く", "イク"),
            Token::without_reading("。"),
        ];
        let expected: String = tokens.iter().map(|t| t.surface.as_str()).collect();
        let annotator = Annotator::new(ScriptedTokenizer::new(tokens));
        let units = annotator.annotate(&expected).unwrap();
        let joined: String = units.iter().map(|u| u.surface.as_str()).collect();
        assert_eq!(joined, expected);
    }
}
