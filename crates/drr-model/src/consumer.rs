use crate::report::Report;
use crate::validation::ValidationRuleResult;

/// Read-only consumer of a finished validation cycle (e.g. a display layer).
pub trait ReportConsumer {
    fn consume(&mut self, report: &Report, results: &[ValidationRuleResult]);
}
