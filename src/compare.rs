//! Cross-annotator comparison of extracted spans.
//!
//! A [`PresenceTable`] records, for every distinct span text, which sources
//! (annotators or models) produced it, and writes the tab-separated report:
//!
//! ```text
//! Entity	alice	bob
//! abscisic acid	1	1
//! acid	1	0
//! ```

use std::collections::HashMap;
use std::io::Write;

use thiserror::Error;
use tracing::debug;

/// Header of the first report column.
pub const ENTITY_COLUMN: &str = "Entity";

/// Errors from building or writing a comparison report.
#[derive(Debug, Error)]
pub enum CompareError {
    /// No source columns were given
    #[error("comparison needs at least one source")]
    NoSources,

    /// A source index past the configured sources
    #[error("unknown source index {index} (table has {sources} source(s))")]
    UnknownSource {
        /// Requested index
        index: usize,
        /// Number of configured sources
        sources: usize,
    },

    /// Writing the report failed
    #[error("failed to write comparison report: {0}")]
    Write(#[from] csv::Error),

    /// Flushing the report failed
    #[error("failed to flush comparison report: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-source counts for a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSummary {
    /// Distinct spans found by each source, in source order
    pub per_source: Vec<(String, usize)>,
    /// Distinct spans found by every source
    pub shared: usize,
    /// Distinct spans overall
    pub total: usize,
}

/// Mapping from distinct span text to presence flags per source.
///
/// Rows keep first-seen order.
#[derive(Debug, Clone)]
pub struct PresenceTable {
    sources: Vec<String>,
    rows: Vec<(String, Vec<bool>)>,
    index: HashMap<String, usize>,
}

impl PresenceTable {
    /// Creates an empty table with one column per source.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::NoSources`] when `sources` is empty.
    pub fn new(sources: Vec<String>) -> Result<Self, CompareError> {
        if sources.is_empty() {
            return Err(CompareError::NoSources);
        }
        Ok(Self {
            sources,
            rows: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Marks each of `spans` as present for the source at `source`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::UnknownSource`] when `source` is out of range.
    pub fn add<I, S>(&mut self, source: usize, spans: I) -> Result<(), CompareError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = self.sources.len();
        if source >= width {
            return Err(CompareError::UnknownSource {
                index: source,
                sources: width,
            });
        }

        for span in spans {
            let text = span.as_ref();
            let row = match self.index.get(text) {
                Some(&row) => row,
                None => {
                    self.rows.push((text.to_string(), vec![false; width]));
                    self.index.insert(text.to_string(), self.rows.len() - 1);
                    self.rows.len() - 1
                }
            };
            self.rows[row].1[source] = true;
        }

        debug!(source = %self.sources[source], rows = self.rows.len(), "added spans");
        Ok(())
    }

    /// Source names in column order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Number of distinct spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no spans were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Presence flags for `text`, if any source produced it.
    #[must_use]
    pub fn presence(&self, text: &str) -> Option<&[bool]> {
        self.index.get(text).map(|&row| self.rows[row].1.as_slice())
    }

    /// Iterates rows in first-seen order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.rows
            .iter()
            .map(|(text, flags)| (text.as_str(), flags.as_slice()))
    }

    /// Counts spans per source and spans shared by all sources.
    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        let per_source = self
            .sources
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let count = self.rows.iter().filter(|(_, flags)| flags[i]).count();
                (name.clone(), count)
            })
            .collect();
        let shared = self
            .rows
            .iter()
            .filter(|(_, flags)| flags.iter().all(|present| *present))
            .count();

        ComparisonSummary {
            per_source,
            shared,
            total: self.rows.len(),
        }
    }

    /// Writes the tab-separated report: `Entity` then one `1`/`0` column per source.
    ///
    /// Span texts holding a tab, a quote or a line break are double-quoted, so
    /// every row keeps the header's column count.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Write`] or [`CompareError::Io`] if the writer fails.
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), CompareError> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        let mut header = Vec::with_capacity(self.sources.len() + 1);
        header.push(ENTITY_COLUMN);
        header.extend(self.sources.iter().map(String::as_str));
        tsv.write_record(&header)?;

        for (text, flags) in &self.rows {
            let mut record = Vec::with_capacity(flags.len() + 1);
            record.push(text.as_str());
            record.extend(flags.iter().map(|present| if *present { "1" } else { "0" }));
            tsv.write_record(&record)?;
        }

        tsv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_sources() -> PresenceTable {
        PresenceTable::new(vec!["alice".to_string(), "bob".to_string()]).unwrap()
    }

    #[test]
    fn test_presence_table_requires_sources() {
        assert!(matches!(
            PresenceTable::new(Vec::new()),
            Err(CompareError::NoSources)
        ));
    }

    #[test]
    fn test_presence_table_rejects_unknown_source() {
        let mut table = two_sources();
        let err = table.add(2, ["x"]).unwrap_err();
        assert!(matches!(err, CompareError::UnknownSource { index: 2, sources: 2 }));
    }

    #[test]
    fn test_presence_table_dedupes_and_flags() {
        let mut table = two_sources();
        table.add(0, ["abscisic acid", "acid", "acid"]).unwrap();
        table.add(1, ["abscisic acid", "guard cell"]).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.presence("abscisic acid"), Some(&[true, true][..]));
        assert_eq!(table.presence("acid"), Some(&[true, false][..]));
        assert_eq!(table.presence("guard cell"), Some(&[false, true][..]));
        assert_eq!(table.presence("missing"), None);
    }

    #[test]
    fn test_presence_table_keeps_first_seen_order() {
        let mut table = two_sources();
        table.add(1, ["b", "a"]).unwrap();
        table.add(0, ["c", "a"]).unwrap();
        let order: Vec<&str> = table.rows().map(|(text, _)| text).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_write_tsv_format() {
        let mut table = two_sources();
        table.add(0, ["x y", "x"]).unwrap();
        table.add(1, ["x y"]).unwrap();

        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Entity\talice\tbob\nx y\t1\t1\nx\t1\t0\n");
    }

    #[test]
    fn test_write_tsv_quotes_span_with_tab() {
        let mut table = two_sources();
        table.add(0, ["salt\tstress response"]).unwrap();

        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Entity\talice\tbob\n\"salt\tstress response\"\t1\t0\n");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(&rows[0][0], "salt\tstress response");
    }

    #[test]
    fn test_write_tsv_header_only_when_empty() {
        let table = two_sources();
        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Entity\talice\tbob\n");
    }

    #[test]
    fn test_summary_counts() {
        let mut table = two_sources();
        table.add(0, ["a", "b"]).unwrap();
        table.add(1, ["b", "c", "d"]).unwrap();
        let summary = table.summary();
        assert_eq!(
            summary.per_source,
            vec![("alice".to_string(), 2), ("bob".to_string(), 3)]
        );
        assert_eq!(summary.shared, 1);
        assert_eq!(summary.total, 4);
    }
}
