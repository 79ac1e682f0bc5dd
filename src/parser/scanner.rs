//! Single-pass scan for top-level tagged spans.
//!
//! The scan counts begin and end occurrences and records where the current
//! outermost span started. It never reads tag names: `<` followed by `/` is an
//! end occurrence, any other `<` is a begin occurrence.

use std::ops::Range;

use tracing::trace;

use super::tags::TagSet;

/// A complete, balanced, top-level span of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// The span including its own delimiting tags
    pub text: &'a str,
    /// Byte offset of `text` within the scanned input
    pub start: usize,
}

impl Span<'_> {
    /// Byte range of the span within the scanned input.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Scanner position relative to the current top-level span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No begin occurrence since the last reset
    Searching,
    /// Inside a span that opened at `start` and is not yet balanced
    InsideSpan {
        /// Byte offset of the span's first begin occurrence
        start: usize,
    },
    /// The span `start..end` just balanced; counters reset on the next step
    EmitAndReset {
        /// Byte offset of the span's first begin occurrence
        start: usize,
        /// Byte offset one past the span's closing end tag
        end: usize,
    },
}

/// Counting state machine behind [`find_top_level_spans`].
#[derive(Debug, Clone)]
pub struct SpanScanner {
    end_tag_len: usize,
    state: ScanState,
    begin_count: usize,
    end_count: usize,
}

impl SpanScanner {
    /// Creates a scanner in the `Searching` state.
    #[must_use]
    pub fn new(tags: &TagSet) -> Self {
        Self {
            end_tag_len: tags.end().len(),
            state: ScanState::Searching,
            begin_count: 0,
            end_count: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Begin occurrences counted since the last reset.
    #[must_use]
    pub fn begin_count(&self) -> usize {
        self.begin_count
    }

    /// End occurrences counted since the last reset.
    #[must_use]
    pub fn end_count(&self) -> usize {
        self.end_count
    }

    /// Feeds the byte at `index` of `input` to the scanner.
    ///
    /// Returns the byte range of a span when this byte closes one.
    pub fn step(&mut self, input: &str, index: usize) -> Option<Range<usize>> {
        if let ScanState::EmitAndReset { .. } = self.state {
            self.reset();
        }

        let bytes = input.as_bytes();
        if bytes.get(index) != Some(&b'<') {
            return None;
        }

        if bytes.get(index + 1) == Some(&b'/') {
            self.end_count += 1;
            if let ScanState::InsideSpan { start } = self.state
                && self.end_count == self.begin_count
            {
                let end = ceil_char_boundary(input, index + self.end_tag_len);
                self.state = ScanState::EmitAndReset { start, end };
                return Some(start..end);
            }
        } else {
            if self.begin_count == 0 {
                self.state = ScanState::InsideSpan { start: index };
            }
            self.begin_count += 1;
        }
        None
    }

    fn reset(&mut self) {
        self.state = ScanState::Searching;
        self.begin_count = 0;
        self.end_count = 0;
    }
}

/// Finds the outermost tagged spans of `input`, left to right.
///
/// Each returned span is balanced and includes its delimiting tags. When the
/// whole input is one tag wrapping everything else, the only span returned is
/// the whole input. An unclosed begin tag swallows the rest of the input and
/// produces no span.
#[must_use]
pub fn find_top_level_spans<'a>(input: &'a str, tags: &TagSet) -> Vec<Span<'a>> {
    let mut scanner = SpanScanner::new(tags);
    let mut spans = Vec::new();

    for index in 0..input.len() {
        if let Some(range) = scanner.step(input, index) {
            trace!(start = range.start, end = range.end, "top-level span closed");
            spans.push(Span {
                text: &input[range.clone()],
                start: range.start,
            });
        }
    }

    if let ScanState::InsideSpan { .. } = scanner.state() {
        trace!(
            begin = scanner.begin_count(),
            end = scanner.end_count(),
            "input ended inside an unclosed span"
        );
    }

    spans
}

/// Counts begin and end occurrences over the whole input.
#[must_use]
pub fn count_tags(input: &str) -> (usize, usize) {
    let bytes = input.as_bytes();
    let mut begin = 0;
    let mut end = 0;
    for (index, byte) in bytes.iter().enumerate() {
        if *byte != b'<' {
            continue;
        }
        if bytes.get(index + 1) == Some(&b'/') {
            end += 1;
        } else {
            begin += 1;
        }
    }
    (begin, end)
}

fn ceil_char_boundary(input: &str, mut index: usize) -> usize {
    if index >= input.len() {
        return input.len();
    }
    while !input.is_char_boundary(index) {
        index += 1;
    }
    index
}
