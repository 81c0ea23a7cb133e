//! JSON wire payload
//!
//! The process writes exactly one JSON value to stdout and exits with
//! status 0 in success and failure alike; callers learn about failures
//! from the payload shape, not the exit code.

use anyhow::Result;
use furiwake_core::{AnnotateError, TextResult, Unit};
use serde::Serialize;
use std::io::Write;

/// Error object payload: `{"error": ..., "trace": ...?}`
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    /// What went wrong
    pub error: String,
    /// Diagnostic detail, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl From<&AnnotateError> for ErrorPayload {
    fn from(err: &AnnotateError) -> Self {
        match err {
            AnnotateError::AnnotationFailed { message, trace } => Self {
                error: message.clone(),
                trace: trace.clone(),
            },
            other => Self {
                error: other.to_string(),
                trace: None,
            },
        }
    }
}

/// One batch slot: the unit list, or the failure isolated to that text
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TextPayload {
    /// Aligned units for a successfully annotated text
    Units(Vec<Unit>),
    /// The per-text error object
    Error(ErrorPayload),
}

impl From<&TextResult> for TextPayload {
    fn from(result: &TextResult) -> Self {
        match result {
            Ok(units) => TextPayload::Units(units.clone()),
            Err(err) => TextPayload::Error(ErrorPayload::from(err)),
        }
    }
}

/// The single JSON value written to stdout
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Single-text success: array of units
    Units(Vec<Unit>),
    /// Batch success: one slot per input text, index-aligned
    Batch(Vec<TextPayload>),
    /// Top-level failure
    Error(ErrorPayload),
}

impl Payload {
    /// Builds a top-level error payload from a bare message.
    pub fn error(message: impl Into<String>) -> Self {
        Payload::Error(ErrorPayload {
            error: message.into(),
            trace: None,
        })
    }
}

impl From<&AnnotateError> for Payload {
    fn from(err: &AnnotateError) -> Self {
        Payload::Error(ErrorPayload::from(err))
    }
}

/// Writes one payload as compact JSON followed by a newline
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    /// Creates a new JSON writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serializes the payload, appends a newline and flushes
    pub fn write(&mut self, payload: &Payload) -> Result<()> {
        serde_json::to_writer(&mut self.writer, payload)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
