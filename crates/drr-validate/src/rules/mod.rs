//! Rule descriptors and the built-in compliance rules.

mod non_negative;
mod reporting_date;

use chrono::NaiveDate;

use drr_model::Fact;

pub use non_negative::NonNegativeValue;
pub use reporting_date::{ReportingDateNotFuture, parse_reporting_date};

/// A single fact as seen by a rule.
#[derive(Debug, Clone, Copy)]
pub struct FactContext<'a> {
    pub concept: &'a str,
    pub fact: &'a Fact,
    /// Date against which "not in the future" is judged.
    pub as_of: NaiveDate,
}

/// Pass/fail verdict with a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub passed: bool,
    pub details: String,
}

impl RuleOutcome {
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
        }
    }

    pub fn fail(details: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: details.into(),
        }
    }
}

/// A compliance rule evaluated once per fact.
///
/// Rules must be pure: the same context always yields the same outcome.
pub trait Rule: Send + Sync {
    /// Stable identifier, e.g. `R001-AssetSoundness`.
    fn id(&self) -> &str;

    /// Description of the check for one concept.
    fn describe(&self, concept: &str) -> String;

    fn check(&self, context: &FactContext<'_>) -> RuleOutcome;
}
