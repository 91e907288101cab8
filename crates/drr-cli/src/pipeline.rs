//! Reporting cycle with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Standardize**: parse raw CSV text and build the report
//! 2. **Transmit**: hand the report to a gateway
//! 3. **Validate**: run the compliance rules and summarize
//!
//! A cycle whose transmission fails stops before validation.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info, info_span, trace, warn};

use drr_ingest::{HeaderMode, ParseStats, parse_report_lines};
use drr_model::{Report, ReportConsumer, ReportingProfile, ValidationRuleResult, ValidationSummary};
use drr_report::{ReportBuilder, ReportStats};
use drr_transmit::{TransmissionError, TransmissionReceipt, Transmitter};
use drr_validate::RuleSet;

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Standardize
// ============================================================================

/// Settings for turning raw text into a report.
#[derive(Debug, Clone, Default)]
pub struct StandardizeOptions {
    pub header: HeaderMode,
    pub profile: ReportingProfile,
}

#[derive(Debug, Clone)]
pub struct StandardizeResult {
    pub report: Report,
    pub stats: ParseStats,
}

impl StandardizeResult {
    pub fn report_stats(&self) -> ReportStats {
        ReportStats::of(&self.report)
    }
}

/// Parse `text` and build a report dated `as_of`.
pub fn standardize(
    text: &str,
    options: &StandardizeOptions,
    as_of: NaiveDate,
) -> StandardizeResult {
    let span = info_span!("standardize");
    let _guard = span.enter();
    let start = Instant::now();

    let output = parse_report_lines(text, options.header);
    for record in &output.records {
        trace!(asset_id = redact_value(&record.asset_id), date = %record.date, "record accepted");
    }
    let report = ReportBuilder::new(options.profile.clone()).build(output.records, as_of);

    info!(
        accepted = output.stats.accepted,
        dropped = output.stats.dropped,
        concepts = report.facts.concept_count(),
        facts = report.facts.fact_count(),
        duration_ms = start.elapsed().as_millis(),
        "standardize complete"
    );
    StandardizeResult {
        report,
        stats: output.stats,
    }
}

// ============================================================================
// Stage 2: Transmit
// ============================================================================

pub async fn transmit<T>(
    report: &Report,
    transmitter: &T,
) -> Result<TransmissionReceipt, TransmissionError>
where
    T: Transmitter + ?Sized,
{
    let start = Instant::now();
    let result = transmitter.transmit(report).await;
    match &result {
        Ok(receipt) => info!(
            status = receipt.status,
            duration_ms = start.elapsed().as_millis(),
            "transmit complete"
        ),
        Err(error) => warn!(
            status = error.status(),
            %error,
            duration_ms = start.elapsed().as_millis(),
            "transmit failed"
        ),
    }
    result
}

// ============================================================================
// Stage 3: Validate
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub results: Vec<ValidationRuleResult>,
    pub summary: ValidationSummary,
}

impl ValidationOutcome {
    pub fn is_approved(&self) -> bool {
        self.summary.is_approved()
    }
}

/// Run the default rules against `report`.
pub fn validate_stage(report: &Report, as_of: NaiveDate) -> ValidationOutcome {
    validate_with(report, &RuleSet::default_rules(), as_of)
}

pub fn validate_with(report: &Report, rules: &RuleSet, as_of: NaiveDate) -> ValidationOutcome {
    let span = info_span!("validate", as_of = %as_of);
    let _guard = span.enter();
    let start = Instant::now();

    let results = rules.validate(report, as_of);
    let summary = ValidationSummary::from_results(&results);
    for (rule_id, tally) in &summary.by_rule {
        debug!(rule_id = %rule_id, passed = tally.passed, failed = tally.failed, "rule tally");
    }
    info!(
        total = summary.total,
        failed = summary.failed,
        approved = summary.is_approved(),
        duration_ms = start.elapsed().as_millis(),
        "validate complete"
    );
    ValidationOutcome { results, summary }
}

// ============================================================================
// Full cycle
// ============================================================================

#[derive(Debug)]
pub enum CycleOutcome {
    Validated {
        standardized: StandardizeResult,
        receipt: TransmissionReceipt,
        validation: ValidationOutcome,
    },
    TransmissionFailed {
        standardized: StandardizeResult,
        error: TransmissionError,
    },
}

impl CycleOutcome {
    pub fn standardized(&self) -> &StandardizeResult {
        match self {
            Self::Validated { standardized, .. }
            | Self::TransmissionFailed { standardized, .. } => standardized,
        }
    }

    /// True only when transmission succeeded and no rule failed.
    pub fn is_approved(&self) -> bool {
        match self {
            Self::Validated { validation, .. } => validation.is_approved(),
            Self::TransmissionFailed { .. } => false,
        }
    }
}

/// Standardize, transmit and validate one input.
///
/// `consumer` receives the report and results only when validation ran.
pub async fn run_cycle<T, C>(
    text: &str,
    options: &StandardizeOptions,
    as_of: NaiveDate,
    transmitter: &T,
    consumer: &mut C,
) -> CycleOutcome
where
    T: Transmitter + ?Sized,
    C: ReportConsumer + ?Sized,
{
    let standardized = standardize(text, options, as_of);
    let receipt = match transmit(&standardized.report, transmitter).await {
        Ok(receipt) => receipt,
        Err(error) => return CycleOutcome::TransmissionFailed { standardized, error },
    };
    let validation = validate_stage(&standardized.report, as_of);
    consumer.consume(&standardized.report, &validation.results);
    CycleOutcome::Validated {
        standardized,
        receipt,
        validation,
    }
}
