//! Raw data ingestion for the DRR simulator.
//!
//! This crate turns untrusted delimited text into [`RawRecord`]s and
//! provides the sources that text can come from.
//!
//! # Features
//!
//! - **Parsing**: Tolerant `AssetID, Value, Date` row parser that never fails
//! - **Header Handling**: Explicit [`HeaderMode`] with a heuristic fallback
//! - **Sources**: Inline text, file upload, built-in samples, generator with fallback
//! - **Discovery**: List CSV files in a folder for batch runs
//!
//! # Example
//!
//! ```
//! use drr_ingest::{HeaderMode, parse, parse_with};
//!
//! let records = parse("AssetID, Value, Date\nCash_KRW, 15000000, 2023-11-30");
//! assert_eq!(records.len(), 1);
//!
//! let records = parse_with("Cash_KRW, 15000000, 2023-11-30", HeaderMode::Absent);
//! assert_eq!(records[0].asset_id, "Cash_KRW");
//! ```
//!
//! [`RawRecord`]: drr_model::RawRecord

mod discovery;
mod error;
mod parse;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use parse::{
    HeaderMode, ParseOutput, ParseStats, looks_like_header, parse, parse_leading_number,
    parse_report_lines, parse_with,
};

// === Sources ===
pub use source::{
    FallbackSource, FileSource, InlineSource, MAX_SOURCE_FILE_SIZE, RawTextSource, SampleDataset,
    SampleProvider, SampleSource, Scenario, UnavailableProvider, check_file_size_with_limit,
    read_text_file,
};

// === File Discovery ===
pub use discovery::list_csv_files;
