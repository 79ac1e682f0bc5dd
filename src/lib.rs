//! Tagspan Core Library
//!
//! This library extracts hand-annotated entity spans from tagged text such as
//! plant-science abstracts marked up with `<>…</>` tags, and compares the spans
//! produced by different annotators.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`clean`] - Lower-casing and whitespace normalization of annotated text
//! - [`parser`] - Nested tag parsing into spans at every depth
//! - [`export`] - CSV/JSON output of one annotator's spans
//! - [`compare`] - Presence table and TSV report across annotators

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clean;
pub mod compare;
pub mod export;
pub mod parser;

// Re-export commonly used types
pub use clean::{clean, clean_text, read_cleaned};
pub use compare::{CompareError, ComparisonSummary, PresenceTable};
pub use export::{ExportError, ExportFormat, write_entities};
pub use parser::{
    ExtractedSpan, ParseError, ParseMode, Parser, TagSet, parse, parse_spans, parse_strict,
};
