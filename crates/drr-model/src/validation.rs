use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of one rule applied to one fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRuleResult {
    pub rule_id: String,
    /// Human-readable check description naming the concept.
    pub description: String,
    pub passed: bool,
    /// Checked value or date and whether it satisfied the rule.
    pub details: String,
}

/// Pass/fail counts for one rule id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTally {
    pub passed: usize,
    pub failed: usize,
}

/// Aggregate view over a result list.
///
/// A report is approved iff no result failed; an empty list is approved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub by_rule: BTreeMap<String, RuleTally>,
}

impl ValidationSummary {
    pub fn from_results(results: &[ValidationRuleResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            let tally = summary.by_rule.entry(result.rule_id.clone()).or_default();
            if result.passed {
                summary.passed += 1;
                tally.passed += 1;
            } else {
                summary.failed += 1;
                tally.failed += 1;
            }
        }
        summary
    }

    pub fn is_approved(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(rule_id: &str, passed: bool) -> ValidationRuleResult {
        ValidationRuleResult {
            rule_id: rule_id.to_string(),
            description: String::new(),
            passed,
            details: String::new(),
        }
    }

    #[test]
    fn empty_results_are_approved() {
        let summary = ValidationSummary::from_results(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.is_approved());
    }

    #[test]
    fn counts_by_rule() {
        let summary = ValidationSummary::from_results(&[
            result("R001", true),
            result("R002", false),
            result("R001", false),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert!(!summary.is_approved());
        assert_eq!(
            summary.by_rule["R001"],
            RuleTally {
                passed: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(result("R001", true)).unwrap();
        assert_eq!(json["ruleId"], "R001");
        assert_eq!(json["passed"], true);
    }
}
