//! Providers of raw delimited text.
//!
//! The parser treats whatever a source returns as untrusted input; sources
//! only decide where the text comes from.

mod file;
mod sample;

pub use file::{FileSource, MAX_SOURCE_FILE_SIZE, check_file_size_with_limit, read_text_file};
pub use sample::{
    FallbackSource, SampleDataset, SampleProvider, SampleSource, Scenario, UnavailableProvider,
};

use crate::error::Result;

/// A supplier of one batch of raw text.
pub trait RawTextSource {
    /// Short name used in logs and summaries.
    fn name(&self) -> &str;

    /// Produce the raw text for one batch.
    fn read_text(&self) -> Result<String>;
}

/// Text entered directly (e.g. on the command line).
#[derive(Debug, Clone)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RawTextSource for InlineSource {
    fn name(&self) -> &str {
        "inline"
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
