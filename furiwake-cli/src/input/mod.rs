//! Input file handling

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a transient input file fully as UTF-8 text, then deletes it.
///
/// The file is a hand-off artifact from the caller: deletion is attempted
/// even when reading fails, and a failed deletion is logged and ignored. A
/// missing file is treated as empty input. The content is never trimmed —
/// leading and trailing whitespace belongs to the text.
pub fn read_transient(path: &Path) -> Result<String> {
    if !path.exists() {
        log::debug!(
            "transient input {} does not exist, treating as empty",
            path.display()
        );
        return Ok(String::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read input file: {}", path.display()));

    if let Err(e) = fs::remove_file(path) {
        log::warn!(
            "failed to delete transient input {}: {e}",
            path.display()
        );
    }

    content
}

/// Reads a batch file as UTF-8 text, leaving it in place.
pub fn read_batch_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("cannot read batch file: {}", path.display()))
}
