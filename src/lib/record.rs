#![forbid(unsafe_code)]

//! The FASTQ record model: four raw lines grouped into one record, and the
//! conversions between flat line lists and records.

use itertools::Itertools;
use thiserror::Error;

/// The number of lines that make up one FASTQ record.
pub const LINES_PER_RECORD: usize = 4;

/// The error that may occur when grouping raw lines into records.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RecordSetError {
    #[error("FASTQ line count {line_count} is not a multiple of 4: {remainder} trailing line(s) do not form a complete record")]
    TruncatedRecord { line_count: usize, remainder: usize },
}

/// One four-line FASTQ record, kept as the raw lines that were read.
///
/// Lines are carried verbatim: the separator line (which may be a bare `+` or
/// `+` followed by a copy of the header) and any oddities in the header or
/// quality lines round-trip to the output untouched. No field is ever
/// inspected except `sequence`, which serves as the sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// The header line (`@...`).
    pub header: String,
    /// The sequence line; the sort key.
    pub sequence: String,
    /// The separator line (`+...`).
    pub separator: String,
    /// The quality line.
    pub quality: String,
}

impl FastqRecord {
    /// The value records are ordered by: the sequence line.
    #[inline]
    pub fn key(&self) -> &str {
        &self.sequence
    }

    /// Consume the record, returning its four lines in file order.
    pub fn into_lines(self) -> [String; LINES_PER_RECORD] {
        [self.header, self.sequence, self.separator, self.quality]
    }
}

/// Groups raw input lines into [`FastqRecord`]s, four consecutive lines per
/// record, preserving input order.
///
/// Record contents are not validated; a "record" here is whatever four lines
/// happen to be adjacent. The only structural requirement is that no lines are
/// left over at the end of the input.
///
/// # Errors
///
/// - [`RecordSetError::TruncatedRecord`] if the line count is not a multiple
///   of four.
pub fn records_from_lines(lines: Vec<String>) -> Result<Vec<FastqRecord>, RecordSetError> {
    let line_count = lines.len();
    let remainder = line_count % LINES_PER_RECORD;
    if remainder != 0 {
        return Err(RecordSetError::TruncatedRecord { line_count, remainder });
    }

    Ok(lines
        .into_iter()
        .tuples()
        .map(|(header, sequence, separator, quality)| FastqRecord {
            header,
            sequence,
            separator,
            quality,
        })
        .collect())
}
