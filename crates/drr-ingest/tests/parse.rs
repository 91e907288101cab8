//! Integration tests for the asset-row parser.

use drr_ingest::{HeaderMode, parse, parse_report_lines, parse_with};
use drr_model::FactValue;
use proptest::prelude::*;

#[test]
fn header_plus_rows_yields_one_record_per_row() {
    let text = "AssetID, Value, Date
KOSPI_Samsung_Elec, 75000000, 2023-12-01
KOSPI_SK_Hynix, 12500000, 2023-11-15
Cash_KRW_Reserve, 100000000, 2023-11-30";

    let records = parse(text);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].asset_id, "KOSPI_Samsung_Elec");
    assert_eq!(records[2].value, FactValue::Number(100_000_000.0));
}

#[test]
fn header_line_never_becomes_a_record() {
    for header in ["asset_id,value,date", "ID, VALUE, DATE", "자산코드, 가치, 기준일"] {
        let text = format!("{header}\nCash, 1, 2023-11-30");
        let records = parse(&text);
        assert_eq!(records.len(), 1, "header {header:?} was not skipped");
        assert_eq!(records[0].asset_id, "Cash");
    }
}

#[test]
fn short_lines_are_dropped_silently() {
    let text = "Cash, 1, 2023-11-30\nonly-two, 5\n\nBond, 2, 2023-10-20";
    let output = parse_report_lines(text, HeaderMode::Absent);

    assert_eq!(output.records.len(), 2);
    assert_eq!(output.stats.dropped, 2);
    assert_eq!(output.stats.lines, 4);
    assert!(!output.stats.header_skipped);
}

#[test]
fn headerless_single_row() {
    let records = parse("Samsung, -500000, 2025-01-01\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].asset_id, "Samsung");
    assert_eq!(records[0].value, FactValue::Number(-500_000.0));
    assert_eq!(records[0].date, "2025-01-01");
}

#[test]
fn empty_input_yields_nothing() {
    assert!(parse("").is_empty());
    assert!(parse_with("", HeaderMode::Present).is_empty());
}

#[test]
fn windows_line_endings_are_tolerated() {
    let text = "A, 1, 2023-01-01\r\nB, 2, 2023-01-02\r\n";
    let records = parse_with(text, HeaderMode::Absent);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, "2023-01-01");
}

proptest! {
    #[test]
    fn parser_is_total(text in "\\PC*") {
        let output = parse_report_lines(&text, HeaderMode::Auto);
        prop_assert_eq!(output.stats.accepted, output.records.len());
        prop_assert!(output.records.iter().all(|r| !r.asset_id.is_empty()));
    }

    #[test]
    fn well_formed_rows_are_all_kept(
        rows in prop::collection::vec(
            ("[A-Z][A-Za-z_]{0,10}", -1.0e9f64..1.0e9, 2000u32..2030),
            0..20,
        )
    ) {
        let mut text = String::from("AssetID,Value,Date\n");
        for (asset, value, year) in &rows {
            text.push_str(&format!("{asset},{value},{year}-01-01\n"));
        }
        let records = parse(&text);
        prop_assert_eq!(records.len(), rows.len());
    }
}
