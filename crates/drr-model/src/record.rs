use serde::{Deserialize, Serialize};

use crate::value::FactValue;

/// One accepted input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Trimmed, non-empty asset identifier.
    pub asset_id: String,
    pub value: FactValue,
    /// Reporting date as written in the input (not checked here).
    pub date: String,
}

impl RawRecord {
    pub fn new(asset_id: impl Into<String>, value: FactValue, date: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            value,
            date: date.into(),
        }
    }
}
