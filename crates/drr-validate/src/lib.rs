//! Compliance validation for standardized reports.
//!
//! Every fact in a report is checked by an ordered set of rules:
//!
//! - **R001 Asset soundness**: the value must be a number `>= 0`
//! - **R002 Filing deadline**: the context date must not be after the as-of date
//!
//! Results are produced facts-outer, rules-inner, so a report with `n`
//! facts yields `n * rules` results in a stable order.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use drr_model::{Fact, FactValue, Report, ReportHeader};
//! use drr_validate::validate;
//!
//! let mut report = Report::new(ReportHeader::new("t", "e", "2024-01-31"));
//! report.facts.push(
//!     "Assets.FinancialValue.Cash",
//!     Fact::new("AsOf_2023-12-01", "KRW", FactValue::Number(-1.0)),
//! );
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let results = validate(&report, as_of);
//! assert_eq!(results.len(), 2);
//! assert!(!results[0].passed);
//! assert!(results[1].passed);
//! ```

mod engine;
mod export;
mod format;
pub mod rules;

pub use engine::{RuleSet, validate};
pub use export::{ExportError, write_results_csv, write_results_json};
pub use format::format_grouped;
pub use rules::{
    FactContext, NonNegativeValue, ReportingDateNotFuture, Rule, RuleOutcome,
    parse_reporting_date,
};
