//! Resolution of nested spans at every depth.

use tracing::trace;

use super::extracted::ExtractedSpan;
use super::scanner::find_top_level_spans;
use super::tags::{TagSet, strip_outer};

/// Resolves every span of `input` at every nesting depth.
///
/// Output order is outermost first, depth-first, left to right: a span's
/// descendants all come before its next sibling. Pending text is kept on an
/// explicit work stack, so nesting depth is bounded by memory rather than by
/// the call stack.
#[must_use]
pub fn resolve(input: &str, tags: &TagSet) -> Vec<ExtractedSpan> {
    let mut resolved = Vec::new();
    let mut pending = vec![(input, 0usize)];

    while let Some((text, depth)) = pending.pop() {
        let spans = find_top_level_spans(text, tags);

        match spans.as_slice() {
            [] => {}
            [only] => {
                let stripped = tags.strip_all(only.text);
                trace!(depth, range = ?only.range(), text = %stripped, "resolved span");
                resolved.push(ExtractedSpan::new(stripped, depth));
                pending.push((strip_outer(only.text), depth + 1));
            }
            // Reversed so the leftmost sibling is popped first.
            siblings => pending.extend(siblings.iter().rev().map(|span| (span.text, depth))),
        }
    }

    resolved
}
