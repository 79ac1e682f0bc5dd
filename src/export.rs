//! Writers for one annotator's extracted spans.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::parser::ExtractedSpan;

/// Header of the single CSV column.
pub const ENTITIES_COLUMN: &str = "Entities";

/// Output format for extracted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Single-column CSV with an `Entities` header
    #[default]
    Csv,
    /// JSON array of `{ "text", "depth" }` objects
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected 'csv' or 'json')")),
        }
    }
}

/// Errors from writing extracted spans.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The writer failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `spans` as a single `Entities` column, one span per row.
///
/// # Errors
///
/// Returns an [`ExportError`] if the writer fails.
pub fn write_entities_csv<W: Write>(writer: W, spans: &[ExtractedSpan]) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record([ENTITIES_COLUMN])?;
    for span in spans {
        out.write_record([span.text.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes `spans` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization or the writer fails.
pub fn write_entities_json<W: Write>(
    mut writer: W,
    spans: &[ExtractedSpan],
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, spans)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes `spans` in `format`.
///
/// # Errors
///
/// Returns an [`ExportError`] if the writer fails.
pub fn write_entities<W: Write>(
    writer: W,
    spans: &[ExtractedSpan],
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_entities_csv(writer, spans),
        ExportFormat::Json => write_entities_json(writer, spans),
    }
}
