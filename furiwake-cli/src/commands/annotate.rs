//! Annotate command implementation

use crate::error::CliError;
use crate::input;
use crate::output::{Payload, TextPayload};
use anyhow::Result;
use clap::Parser;
use furiwake_core::{
    annotate_batch, parse_batch_input, AnnotateError, Annotator, LinderaTokenizer,
};
use std::path::{Path, PathBuf};

/// Arguments for the annotate command
#[derive(Debug, Parser)]
#[command(
    name = "furiwake",
    version,
    about = "Annotate Japanese text with furigana units for syllable-level timing"
)]
pub struct AnnotateArgs {
    /// Text to annotate
    #[arg(value_name = "TEXT", conflicts_with_all = ["file", "batch"])]
    pub text: Option<String>,

    /// Read the text from FILE, deleting the file after the read
    #[arg(long, value_name = "FILE", conflicts_with = "batch")]
    pub file: Option<PathBuf>,

    /// Annotate every text in FILE, a JSON array of strings
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnnotateArgs {
    /// Executes the command, always producing one payload for stdout.
    pub fn execute(&self) -> Payload {
        self.init_logging();

        log::info!("starting annotation");
        log::debug!("arguments: {:?}", self);

        if let Some(path) = &self.batch {
            return self.execute_batch(path);
        }
        self.execute_single()
    }

    fn execute_single(&self) -> Payload {
        let text = match self.single_text() {
            Ok(text) => text,
            Err(e) => return Payload::error(e.to_string()),
        };

        let annotator = match build_annotator() {
            Ok(annotator) => annotator,
            Err(e) => return Payload::from(&e),
        };

        match annotator.annotate(&text) {
            Ok(units) => Payload::Units(units),
            Err(e) => Payload::from(&e),
        }
    }

    fn execute_batch(&self, path: &Path) -> Payload {
        let body = match input::read_batch_file(path) {
            Ok(body) => body,
            Err(e) => return Payload::from(&AnnotateError::InvalidBatchInput(format!("{e:#}"))),
        };

        let texts = match parse_batch_input(&body) {
            Ok(texts) => texts,
            Err(e) => return Payload::from(&e),
        };

        let annotator = match build_annotator() {
            Ok(annotator) => annotator,
            Err(e) => return Payload::from(&e),
        };

        log::info!("annotating batch of {} texts", texts.len());
        let results = annotate_batch(&annotator, &texts);
        Payload::Batch(results.iter().map(TextPayload::from).collect())
    }

    /// Resolves the single-mode input text from the argument or the
    /// transient file.
    fn single_text(&self) -> Result<String, CliError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return input::read_transient(path).map_err(|e| CliError::InputRead(format!("{e:#}")));
        }
        Err(CliError::MissingInput)
    }

    /// Initializes logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // double initialization only happens in tests; ignore it
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Builds the tokenizer capability once, at startup; a missing backend
/// surfaces here rather than through ambient state.
fn build_annotator() -> Result<Annotator<LinderaTokenizer>, AnnotateError> {
    Ok(Annotator::new(LinderaTokenizer::new()?))
}
