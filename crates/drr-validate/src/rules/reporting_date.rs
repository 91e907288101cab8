use chrono::{DateTime, NaiveDate, Utc};

use drr_model::context_date;

use super::{FactContext, Rule, RuleOutcome};

/// Parse the date part of a context reference.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, which is taken in UTC.
/// Surrounding whitespace is ignored. Slash dates and timestamps without an
/// offset are rejected.
pub fn parse_reporting_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// R002: the reporting date must not lie after the as-of date.
///
/// A date equal to the as-of date passes. Unparsable dates fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportingDateNotFuture;

impl ReportingDateNotFuture {
    pub const ID: &'static str = "R002-FilingDeadline";
}

impl Rule for ReportingDateNotFuture {
    fn id(&self) -> &str {
        Self::ID
    }

    fn describe(&self, concept: &str) -> String {
        format!("Reporting date check for {concept}")
    }

    fn check(&self, context: &FactContext<'_>) -> RuleOutcome {
        let raw = context_date(&context.fact.context_ref);
        match parse_reporting_date(raw) {
            Some(date) if date <= context.as_of => {
                RuleOutcome::pass(format!("Date {raw} is valid."))
            }
            Some(_) => RuleOutcome::fail(format!(
                "Date {raw} is in the future and is not valid."
            )),
            None => RuleOutcome::fail(format!(
                "Date '{raw}' could not be parsed and cannot be confirmed as valid."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use drr_model::{Fact, FactValue};

    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn check(context_ref: &str) -> RuleOutcome {
        let fact = Fact::new(context_ref, "KRW", FactValue::Number(1.0));
        let context = FactContext {
            concept: "Assets.FinancialValue.X",
            fact: &fact,
            as_of: as_of(),
        };
        ReportingDateNotFuture.check(&context)
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_reporting_date(" 2023-12-01 "),
            NaiveDate::from_ymd_opt(2023, 12, 1)
        );
    }

    #[test]
    fn test_parse_rfc3339_uses_utc() {
        assert_eq!(
            parse_reporting_date("2024-01-01T05:00:00+09:00"),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_reporting_date("not-a-date"), None);
        assert_eq!(parse_reporting_date(""), None);
        assert_eq!(parse_reporting_date("2023-13-01"), None);
    }

    #[test]
    fn test_parse_rejects_zone_dependent_forms() {
        assert_eq!(parse_reporting_date("2023/12/01"), None);
        assert_eq!(parse_reporting_date("2023-12-01T10:00:00"), None);
    }

    #[test]
    fn test_past_and_same_day_pass() {
        assert_eq!(
            check("AsOf_2023-12-01"),
            RuleOutcome::pass("Date 2023-12-01 is valid.")
        );
        assert!(check("AsOf_2024-06-30").passed);
    }

    #[test]
    fn test_future_fails() {
        assert_eq!(
            check("AsOf_2025-01-01"),
            RuleOutcome::fail("Date 2025-01-01 is in the future and is not valid.")
        );
    }

    #[test]
    fn test_unparsable_fails() {
        let outcome = check("AsOf_not-a-date");
        assert!(!outcome.passed);
        assert_eq!(
            outcome.details,
            "Date 'not-a-date' could not be parsed and cannot be confirmed as valid."
        );
    }
}
