//! Nested annotation-span parsing.
//!
//! Annotated abstracts mark entities with bracket-style tags that may nest:
//! `<>abscisic <>acid</></>`. This module recovers the plain text of every
//! tagged span at every nesting depth.
//!
//! # Output order
//!
//! Results are ordered outermost first, then depth-first, then left to right.
//! For `<><><>X</> Y</> <>Z</></>` the result is `["X Y Z", "X Y", "X", "Z"]`.
//! Comparison reports rely on this order, so it must not change.
//!
//! # Unbalanced input
//!
//! By default an unclosed begin tag silently absorbs the rest of the input and
//! contributes nothing. [`ParseMode::Strict`] instead rejects any input whose
//! begin and end tag counts differ.
//!
//! # Example
//!
//! ```
//! use tagspan_core::parser::parse;
//!
//! assert_eq!(parse("<><>X</> Y</>"), vec!["X Y", "X"]);
//! ```

mod error;
mod extracted;
mod resolve;
mod scanner;
mod tags;

pub use error::ParseError;
pub use extracted::{ExtractedSpan, span_texts};
pub use resolve::resolve;
pub use scanner::{ScanState, Span, SpanScanner, count_tags, find_top_level_spans};
pub use tags::{DEFAULT_BEGIN_TAG, DEFAULT_END_TAG, TagSet, strip_outer};

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

/// How the parser treats input with unequal begin and end tag counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Parse whatever balances and drop the rest
    #[default]
    Permissive,
    /// Fail with [`ParseError::Malformed`] when the counts differ
    Strict,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown parse mode '{other}' (expected 'permissive' or 'strict')"
            )),
        }
    }
}

/// Span parser bound to one tag set and mode.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    tags: TagSet,
    mode: ParseMode,
}

impl Parser {
    /// Creates a parser with the given tags and mode.
    #[must_use]
    pub fn new(tags: TagSet, mode: ParseMode) -> Self {
        Self { tags, mode }
    }

    /// Returns a copy of this parser using `mode`.
    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// The tag set in use.
    #[must_use]
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The parse mode in use.
    #[must_use]
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Extracts every span of `input` with its nesting depth.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] in strict mode when the input has
    /// unequal begin and end tag counts. Permissive mode never fails.
    #[tracing::instrument(skip(self, input), fields(input_len = input.len(), mode = %self.mode))]
    pub fn parse_spans(&self, input: &str) -> Result<Vec<ExtractedSpan>, ParseError> {
        let (begin, end) = count_tags(input);
        if begin != end {
            match self.mode {
                ParseMode::Strict => return Err(ParseError::malformed(begin, end)),
                ParseMode::Permissive => {
                    warn!(begin, end, "unbalanced tags; unclosed spans will be dropped");
                }
            }
        }

        let spans = resolve(input, &self.tags);
        debug!(spans = spans.len(), "parsing complete");
        Ok(spans)
    }

    /// Extracts the text of every span of `input`.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse_spans`].
    pub fn parse(&self, input: &str) -> Result<Vec<String>, ParseError> {
        self.parse_spans(input).map(span_texts)
    }
}

/// Extracts the text of every `<>`/`</>` span of `input`, permissively.
///
/// Input without tags yields an empty vector.
#[must_use]
pub fn parse(input: &str) -> Vec<String> {
    span_texts(parse_spans(input))
}

/// Like [`parse`], but keeps each span's nesting depth.
#[must_use]
pub fn parse_spans(input: &str) -> Vec<ExtractedSpan> {
    resolve(input, &TagSet::default())
}

/// Like [`parse`], but fails on unequal begin and end tag counts.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the counts differ.
pub fn parse_strict(input: &str) -> Result<Vec<String>, ParseError> {
    Parser::default().with_mode(ParseMode::Strict).parse(input)
}
