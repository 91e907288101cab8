//! Terminal tables for parse statistics, validation results and batches.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use drr_ingest::{ParseStats, SampleDataset};
use drr_model::{Report, ReportConsumer, ValidationRuleResult, ValidationSummary};
use drr_report::ReportStats;
use drr_transmit::TransmissionReceipt;

use crate::types::{BatchEntry, BatchStatus};

/// Prints the results table and the per-rule summary to stdout.
#[derive(Debug, Default)]
pub struct TableConsumer;

impl ReportConsumer for TableConsumer {
    fn consume(&mut self, report: &Report, results: &[ValidationRuleResult]) {
        println!(
            "Report: {} / {} as of {}",
            report.header.entity, report.header.taxonomy, report.header.report_date
        );
        println!("{}", results_table(results));
        let summary = ValidationSummary::from_results(results);
        println!("{}", rule_summary_table(&summary));
        print_verdict(&summary);
    }
}

pub fn results_table(results: &[ValidationRuleResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Rule"),
        header_cell("Check"),
        header_cell("Status"),
        header_cell("Details"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (index, result) in results.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&result.rule_id),
            Cell::new(&result.description),
            status_cell(result.passed),
            Cell::new(&result.details),
        ]);
    }
    if results.is_empty() {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("No facts to validate"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table
}

pub fn rule_summary_table(summary: &ValidationSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Passed"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rule_id, tally) in &summary.by_rule {
        table.add_row(vec![
            Cell::new(rule_id),
            Cell::new(tally.passed),
            count_cell(tally.failed, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.passed).add_attribute(Attribute::Bold),
        count_cell(summary.failed, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

fn print_verdict(summary: &ValidationSummary) {
    if summary.is_approved() {
        println!("Verdict: APPROVED ({} checks passed)", summary.passed);
    } else {
        println!(
            "Verdict: REJECTED ({} of {} checks failed)",
            summary.failed, summary.total
        );
    }
}

pub fn print_standardize_summary(stats: &ParseStats, report: ReportStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input lines"), Cell::new(stats.lines)]);
    table.add_row(vec![
        Cell::new("Header skipped"),
        Cell::new(if stats.header_skipped { "yes" } else { "no" }),
    ]);
    table.add_row(vec![Cell::new("Records accepted"), Cell::new(stats.accepted)]);
    table.add_row(vec![
        Cell::new("Lines dropped"),
        count_cell(stats.dropped, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Concepts"), Cell::new(report.concepts)]);
    table.add_row(vec![Cell::new("Facts"), Cell::new(report.facts)]);
    println!("{table}");
}

pub fn print_receipt(receipt: &TransmissionReceipt) {
    println!("Transmission: {} {}", receipt.status, receipt.message);
}

pub fn print_sample_list() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Description"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for dataset in SampleDataset::all() {
        table.add_row(vec![
            Cell::new(dataset.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sample_description(*dataset)),
            Cell::new(dataset.text().lines().count()),
        ]);
    }
    println!("{table}");
}

fn sample_description(dataset: SampleDataset) -> &'static str {
    match dataset {
        SampleDataset::Default => "Pre-filled portfolio, all rows valid",
        SampleDataset::Clean => "Generator fallback, positive values dated in the past",
        SampleDataset::Dirty => "Generator fallback, one negative value and one future date",
    }
}

pub fn batch_table(entries: &[BatchEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Records"),
        header_cell("Dropped"),
        header_cell("Facts"),
        header_cell("Failed"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 5, CellAlignment::Center);
    let mut total_records = 0usize;
    let mut total_failed = 0usize;
    for entry in entries {
        match &entry.status {
            BatchStatus::Checked(stats) => {
                total_records += stats.records;
                total_failed += stats.failed;
                table.add_row(vec![
                    Cell::new(&entry.name),
                    Cell::new(stats.records),
                    count_cell(stats.dropped, Color::Yellow),
                    Cell::new(stats.facts),
                    count_cell(stats.failed, Color::Red),
                    status_cell(stats.failed == 0),
                ]);
            }
            BatchStatus::Error(message) => {
                table.add_row(vec![
                    Cell::new(&entry.name),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(format!("ERROR: {message}")).fg(Color::Red),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(total_failed, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::LowerBoundary(Width::Fixed(21)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("PASS").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
