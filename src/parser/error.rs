//! Error types for tag parsing operations.

use thiserror::Error;

/// Errors that can occur while configuring or running the span parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Begin and end tag counts differ (strict mode only).
    #[error(
        "malformed input: found {begin} begin tag(s) and {end} end tag(s)\n  Suggestion: Check for an unclosed or stray tag, or rerun without --strict"
    )]
    Malformed {
        /// Number of begin tag occurrences in the input
        begin: usize,
        /// Number of end tag occurrences in the input
        end: usize,
    },

    /// A configured tag marker does not have the `<X>` / `</X>` shape.
    #[error("invalid {kind} tag '{tag}': {reason}\n  Suggestion: {suggestion}")]
    InvalidTag {
        /// Which marker was rejected ("begin" or "end")
        kind: &'static str,
        /// The rejected marker text
        tag: String,
        /// Why the marker is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ParseError {
    /// Creates a `Malformed` error from the observed tag counts.
    #[must_use]
    pub fn malformed(begin: usize, end: usize) -> Self {
        Self::Malformed { begin, end }
    }

    /// Creates an `InvalidTag` error for a begin marker.
    #[must_use]
    pub fn invalid_begin(tag: &str) -> Self {
        Self::InvalidTag {
            kind: "begin",
            tag: tag.to_string(),
            reason: "expected '<' followed by an optional name and '>'".to_string(),
            suggestion: "Use a marker such as <> or <ent>".to_string(),
        }
    }

    /// Creates an `InvalidTag` error for an end marker.
    #[must_use]
    pub fn invalid_end(tag: &str) -> Self {
        Self::InvalidTag {
            kind: "end",
            tag: tag.to_string(),
            reason: "expected '</' followed by an optional name and '>'".to_string(),
            suggestion: "Use a marker such as </> or </ent>".to_string(),
        }
    }
}
