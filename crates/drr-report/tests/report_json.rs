//! Snapshot of the report interchange JSON.

use chrono::NaiveDate;

use drr_ingest::{HeaderMode, parse_with};
use drr_model::{FactValue, RawRecord, Report};
use drr_report::{build_report, render_json, render_json_pretty};

#[test]
fn report_preview_json_is_stable() {
    let records = vec![
        RawRecord::new(
            "KOSPI_Samsung_Elec",
            FactValue::Number(75_000_000.0),
            "2023-12-01",
        ),
        RawRecord::new(
            "Future_Asset_Error",
            FactValue::Number(1_000_000.0),
            "2025-01-01",
        ),
        RawRecord::new(
            "KOSPI_Samsung_Elec",
            FactValue::Number(-500_000.0),
            "2023-12-15",
        ),
        RawRecord::new(
            "Broken",
            FactValue::Invalid("n/a".to_string()),
            "not-a-date",
        ),
    ];
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

    let report = build_report(records, as_of);
    let json = render_json_pretty(&report).unwrap();

    insta::assert_snapshot!("report_preview", json);
}

#[test]
fn overflowing_values_survive_the_json_preview() {
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let text = "X, 1e999, 2023-01-01\nY, -Infinity, 2023-01-02";
    let records = parse_with(text, HeaderMode::Absent);

    let report = build_report(records, as_of);
    let json = render_json(&report).unwrap();
    assert!(json.contains(r#""value":"Infinity""#));
    assert!(json.contains(r#""value":"-Infinity""#));

    let round: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(round, report);
}
