//! Begin/end tag markers and the string operations that remove them.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;

/// Default begin marker.
pub const DEFAULT_BEGIN_TAG: &str = "<>";

/// Default end marker.
pub const DEFAULT_END_TAG: &str = "</>";

#[allow(clippy::expect_used)]
static BEGIN_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[^<>/]*>$").expect("begin tag regex is valid"));

#[allow(clippy::expect_used)]
static END_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</[^<>]*>$").expect("end tag regex is valid"));

/// A begin/end marker pair such as `<>` / `</>` or `<ent>` / `</ent>`.
///
/// The scanner only looks at `<` and the character after it, so the names
/// inside the markers are never compared. The end marker's length decides
/// how far past an end occurrence a span extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    begin: String,
    end: String,
}

impl TagSet {
    /// Creates a tag set after validating both markers.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTag`] when either marker is not of the
    /// form `<X>` / `</X>`.
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Result<Self, ParseError> {
        let begin = begin.into();
        let end = end.into();
        if !BEGIN_TAG_PATTERN.is_match(&begin) {
            return Err(ParseError::invalid_begin(&begin));
        }
        if !END_TAG_PATTERN.is_match(&end) {
            return Err(ParseError::invalid_end(&end));
        }
        Ok(Self { begin, end })
    }

    /// Creates the `<name>` / `</name>` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTag`] when `name` contains `<`, `>` or `/`.
    pub fn named(name: &str) -> Result<Self, ParseError> {
        Self::new(format!("<{name}>"), format!("</{name}>"))
    }

    /// The begin marker.
    #[must_use]
    pub fn begin(&self) -> &str {
        &self.begin
    }

    /// The end marker.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Removes every begin and end marker from `span`, at any depth.
    ///
    /// The text is split on the begin marker first and each piece is then
    /// split on the end marker, so markers that only appear after a begin
    /// marker was cut out are left alone.
    #[must_use]
    pub fn strip_all(&self, span: &str) -> String {
        span.split(self.begin.as_str())
            .flat_map(|piece| piece.split(self.end.as_str()))
            .collect()
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN_TAG.to_string(),
            end: DEFAULT_END_TAG.to_string(),
        }
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.begin, self.end)
    }
}

/// Removes one layer of tags: the text between the first `>` and the last `<`.
///
/// Returns an empty string when there is no such range.
#[must_use]
pub fn strip_outer(span: &str) -> &str {
    let (Some(open), Some(close)) = (span.find('>'), span.rfind('<')) else {
        return "";
    };
    let start = open + 1;
    if start >= close {
        return "";
    }
    &span[start..close]
}
