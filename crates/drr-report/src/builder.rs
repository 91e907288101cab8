use chrono::NaiveDate;
use tracing::debug;

use drr_model::{Fact, RawRecord, Report, ReportHeader, ReportingProfile, concept_name, context_ref};

/// Builds reports under a fixed reporting profile.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    profile: ReportingProfile,
}

impl ReportBuilder {
    pub fn new(profile: ReportingProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ReportingProfile {
        &self.profile
    }

    /// Group records into a report dated `as_of`.
    ///
    /// Each record becomes one fact under `Assets.FinancialValue.<asset_id>`,
    /// appended in input order. Values and dates are carried through
    /// unchecked.
    pub fn build<I>(&self, records: I, as_of: NaiveDate) -> Report
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let header = ReportHeader::new(
            self.profile.taxonomy.as_str(),
            self.profile.entity.as_str(),
            as_of.format("%Y-%m-%d").to_string(),
        );
        let mut report = Report::new(header);
        for record in records {
            let fact = Fact::new(
                context_ref(&record.date),
                self.profile.unit.as_str(),
                record.value,
            );
            report.facts.push(concept_name(&record.asset_id), fact);
        }
        debug!(
            concept_count = report.facts.concept_count(),
            fact_count = report.facts.fact_count(),
            report_date = %report.header.report_date,
            "report built"
        );
        report
    }
}

/// Build a report with the default profile.
pub fn build_report<I>(records: I, as_of: NaiveDate) -> Report
where
    I: IntoIterator<Item = RawRecord>,
{
    ReportBuilder::default().build(records, as_of)
}

/// Concept and fact counts of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub concepts: usize,
    pub facts: usize,
}

impl ReportStats {
    pub fn of(report: &Report) -> Self {
        Self {
            concepts: report.facts.concept_count(),
            facts: report.facts.fact_count(),
        }
    }
}
