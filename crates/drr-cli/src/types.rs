/// Outcome of one file in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub name: String,
    pub status: BatchStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStatus {
    Checked(BatchStats),
    /// The file could not be read.
    Error(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub records: usize,
    pub dropped: usize,
    pub facts: usize,
    /// Failed rule results.
    pub failed: usize,
}

impl BatchEntry {
    pub fn is_approved(&self) -> bool {
        matches!(&self.status, BatchStatus::Checked(stats) if stats.failed == 0)
    }
}
