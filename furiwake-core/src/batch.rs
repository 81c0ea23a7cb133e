//! Batch orchestration
//!
//! Runs the annotation pipeline over an ordered list of texts, keeping one
//! result slot per text. A failing text fills its slot with the error and
//! never stops its siblings from being processed.

use crate::annotate::{Annotator, Unit};
use crate::error::{AnnotateError, Result};
use crate::token::Tokenizer;

/// Per-text result: the unit sequence or the isolated failure.
pub type TextResult = Result<Vec<Unit>>;

/// Ordered per-text results, index-aligned with the input list.
pub type BatchResult = Vec<TextResult>;

/// Annotates each text in order, isolating per-text failures.
pub fn annotate_batch<T: Tokenizer>(annotator: &Annotator<T>, texts: &[String]) -> BatchResult {
    texts.iter().map(|text| annotator.annotate(text)).collect()
}

/// Parses a batch input body as a JSON array of texts.
pub fn parse_batch_input(body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body).map_err(|e| AnnotateError::InvalidBatchInput(e.to_string()))
}
