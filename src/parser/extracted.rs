//! Types representing extracted spans.

use std::fmt;

use serde::Serialize;

/// Plain text of one tagged span with all of its markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSpan {
    /// Span text with every tag marker stripped
    pub text: String,
    /// Nesting depth, 0 for an outermost span
    pub depth: usize,
}

impl ExtractedSpan {
    /// Creates a new extracted span.
    #[must_use]
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
        }
    }
}

impl fmt::Display for ExtractedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.depth, self.text)
    }
}

/// Returns only the texts of `spans`, in order.
#[must_use]
pub fn span_texts(spans: Vec<ExtractedSpan>) -> Vec<String> {
    spans.into_iter().map(|span| span.text).collect()
}
