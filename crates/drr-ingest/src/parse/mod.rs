//! Tolerant `AssetID, Value, Date` row parser.
//!
//! Rows with fewer than three comma-separated fields are dropped without
//! an error; unparsable values become [`FactValue::Invalid`]. Parsing is
//! total over its input: it never fails and never panics.

mod number;

pub use number::parse_leading_number;

use drr_model::{FactValue, RawRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Korean marker for "asset" recognised by the header heuristic.
const ASSET_MARKER: &str = "자산";

/// Minimum number of fields for a data line to be accepted.
const MIN_FIELDS: usize = 3;

/// How the first line of the input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Skip the first line if it looks like a header (contains "id",
    /// case-insensitively, or the Korean "asset" marker).
    #[default]
    Auto,
    /// The first line is always a header.
    Present,
    /// Every line is data.
    Absent,
}

impl HeaderMode {
    fn skips(self, first_line: &str) -> bool {
        match self {
            Self::Auto => looks_like_header(first_line),
            Self::Present => true,
            Self::Absent => false,
        }
    }
}

/// Returns true if a line would be treated as a header by [`HeaderMode::Auto`].
pub fn looks_like_header(line: &str) -> bool {
    line.to_lowercase().contains("id") || line.contains(ASSET_MARKER)
}

/// Line counts gathered while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines seen after trimming the whole text (0 for empty input).
    pub lines: usize,
    pub header_skipped: bool,
    pub accepted: usize,
    /// Data lines silently dropped as malformed.
    pub dropped: usize,
}

/// Parsed records plus the statistics of the parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub records: Vec<RawRecord>,
    pub stats: ParseStats,
}

/// Parse text using automatic header detection.
pub fn parse(text: &str) -> Vec<RawRecord> {
    parse_with(text, HeaderMode::Auto)
}

/// Parse text with an explicit header mode.
pub fn parse_with(text: &str, header: HeaderMode) -> Vec<RawRecord> {
    parse_report_lines(text, header).records
}

/// Parse text and report how many lines were accepted or dropped.
pub fn parse_report_lines(text: &str, header: HeaderMode) -> ParseOutput {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();
    if text.is_empty() {
        return ParseOutput::default();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let header_skipped = header.skips(lines[0]);
    let start = usize::from(header_skipped);

    let mut output = ParseOutput {
        records: Vec::with_capacity(lines.len() - start),
        stats: ParseStats {
            lines: lines.len(),
            header_skipped,
            ..ParseStats::default()
        },
    };

    for (offset, line) in lines.iter().enumerate().skip(start) {
        match parse_line(line) {
            Some(record) => output.records.push(record),
            None => {
                output.stats.dropped += 1;
                debug!(line_number = offset + 1, "dropped malformed line");
            }
        }
    }
    output.stats.accepted = output.records.len();
    output
}

fn parse_line(line: &str) -> Option<RawRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    let asset_id = fields[0].trim();
    if asset_id.is_empty() {
        return None;
    }
    let raw_value = fields[1].trim();
    let value = match parse_leading_number(raw_value) {
        Some(number) => FactValue::Number(number),
        None => FactValue::Invalid(raw_value.to_string()),
    };
    Some(RawRecord::new(asset_id, value, fields[2].trim()))
}
