//! Data model for the digital regulatory reporting (DRR) simulator.
//!
//! The types here are shared by every stage of the pipeline:
//!
//! - [`RawRecord`]: one parsed input row (asset id, value, date)
//! - [`Report`]: the standardized, XBRL-like fact report
//! - [`ValidationRuleResult`]: one rule evaluated against one fact
//! - [`ValidationSummary`]: approval reduction over a result list
//!
//! # Example
//!
//! ```
//! use drr_model::{Fact, FactValue, Report, ReportHeader, concept_name, context_ref};
//!
//! let mut report = Report::new(ReportHeader::new("ifrs-full-2024", "FIN-INST-001", "2024-01-31"));
//! report.facts.push(
//!     concept_name("Cash_KRW"),
//!     Fact::new(context_ref("2023-11-30"), "KRW", FactValue::Number(15_000_000.0)),
//! );
//!
//! assert_eq!(report.facts.fact_count(), 1);
//! ```

pub mod consumer;
pub mod error;
pub mod profile;
pub mod record;
pub mod report;
pub mod validation;
pub mod value;

pub use consumer::ReportConsumer;
pub use error::{ModelError, Result};
pub use profile::{
    CONCEPT_PREFIX, CONTEXT_PREFIX, DEFAULT_ENTITY, DEFAULT_TAXONOMY, DEFAULT_UNIT, FACT_DECIMALS,
    ReportingProfile, concept_name, context_date, context_ref,
};
pub use record::RawRecord;
pub use report::{ConceptFacts, Fact, Facts, Report, ReportHeader};
pub use validation::{RuleTally, ValidationRuleResult, ValidationSummary};
pub use value::FactValue;
