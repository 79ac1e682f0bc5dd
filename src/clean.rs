//! Normalization of annotated text before parsing.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Lower-cases every line, drops blank ones, and joins the rest with single spaces.
///
/// Surrounding whitespace of each line is trimmed. Tags pass through untouched.
#[must_use]
pub fn clean<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies [`clean`] to the lines of `text`.
#[must_use]
pub fn clean_text(text: &str) -> String {
    clean(text.lines())
}

/// Reads `path` and returns its cleaned contents.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read as UTF-8.
#[tracing::instrument]
pub fn read_cleaned(path: &Path) -> io::Result<String> {
    let raw = fs::read_to_string(path)?;
    let cleaned = clean_text(&raw);
    debug!(raw_len = raw.len(), cleaned_len = cleaned.len(), "cleaned input");
    Ok(cleaned)
}
