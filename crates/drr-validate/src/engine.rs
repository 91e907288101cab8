use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use drr_model::{Report, ValidationRuleResult};

use crate::rules::{FactContext, NonNegativeValue, ReportingDateNotFuture, Rule};

/// Ordered list of rules applied to every fact.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// A set with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// R001 (asset soundness) then R002 (filing deadline).
    pub fn default_rules() -> Self {
        Self::empty()
            .with_rule(NonNegativeValue)
            .with_rule(ReportingDateNotFuture)
    }

    /// Append a rule; it runs after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule ids in evaluation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.id())
    }

    /// Evaluate every rule against every fact.
    ///
    /// Concepts are visited in insertion order, facts in stored order, and
    /// rules in set order.
    pub fn validate(&self, report: &Report, as_of: NaiveDate) -> Vec<ValidationRuleResult> {
        let mut results = Vec::with_capacity(report.facts.fact_count() * self.rules.len());
        for (concept, facts) in report.facts.iter() {
            for fact in facts {
                let context = FactContext {
                    concept,
                    fact,
                    as_of,
                };
                for rule in &self.rules {
                    let outcome = rule.check(&context);
                    results.push(ValidationRuleResult {
                        rule_id: rule.id().to_string(),
                        description: rule.describe(concept),
                        passed: outcome.passed,
                        details: outcome.details,
                    });
                }
            }
        }
        debug!(
            fact_count = report.facts.fact_count(),
            result_count = results.len(),
            failed = results.iter().filter(|r| !r.passed).count(),
            as_of = %as_of,
            "validation complete"
        );
        results
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

/// Validate a report with the default rules.
pub fn validate(report: &Report, as_of: NaiveDate) -> Vec<ValidationRuleResult> {
    RuleSet::default_rules().validate(report, as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOutcome;
    use drr_model::{Fact, FactValue, ReportHeader};

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn id(&self) -> &str {
            "X900"
        }

        fn describe(&self, concept: &str) -> String {
            format!("always fails for {concept}")
        }

        fn check(&self, _context: &FactContext<'_>) -> RuleOutcome {
            RuleOutcome::fail("nope")
        }
    }

    fn report_with(values: &[(&str, f64)]) -> Report {
        let mut report = Report::new(ReportHeader::new("t", "e", "2024-01-01"));
        for (concept, value) in values {
            report.facts.push(
                *concept,
                Fact::new("AsOf_2023-01-01", "KRW", FactValue::Number(*value)),
            );
        }
        report
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_default_rules_are_ordered() {
        let rules = RuleSet::default_rules();
        assert_eq!(rules.len(), 2);
        let ids: Vec<&str> = rules.ids().collect();
        assert_eq!(ids, vec!["R001-AssetSoundness", "R002-FilingDeadline"]);
    }

    #[test]
    fn test_facts_outer_rules_inner() {
        let report = report_with(&[("B", 1.0), ("A", -1.0)]);
        let results = validate(&report, as_of());
        let order: Vec<(&str, bool)> = results
            .iter()
            .map(|r| (r.rule_id.as_str(), r.passed))
            .collect();
        assert_eq!(
            order,
            vec![
                ("R001-AssetSoundness", true),
                ("R002-FilingDeadline", true),
                ("R001-AssetSoundness", false),
                ("R002-FilingDeadline", true),
            ]
        );
        assert!(results[0].description.contains("B"));
        assert!(results[2].description.contains("A"));
    }

    #[test]
    fn test_added_rules_run_last() {
        let rules = RuleSet::default_rules().with_rule(AlwaysFails);
        let results = rules.validate(&report_with(&[("A", 1.0)]), as_of());
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].rule_id, "X900");
        assert_eq!(results[2].details, "nope");
        assert_eq!(results[2].description, "always fails for A");
    }

    #[test]
    fn test_empty_set_yields_no_results() {
        let rules = RuleSet::empty();
        assert!(rules.is_empty());
        assert!(rules.validate(&report_with(&[("A", 1.0)]), as_of()).is_empty());
    }

    #[test]
    fn test_concept_without_facts_yields_nothing() {
        let mut report = report_with(&[]);
        report.facts.concept_mut("Assets.FinancialValue.Empty");
        assert!(validate(&report, as_of()).is_empty());
    }
}
