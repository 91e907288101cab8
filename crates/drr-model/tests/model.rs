//! Tests for drr-model types.

use drr_model::{
    Fact, FactValue, RawRecord, Report, ReportHeader, ValidationRuleResult, ValidationSummary,
    concept_name, context_ref,
};

fn sample_report() -> Report {
    let mut report = Report::new(ReportHeader::new("ifrs-full-2024", "FIN-INST-001", "2024-01-31"));
    report.facts.push(
        concept_name("KOSPI_Samsung_Elec"),
        Fact::new(
            context_ref("2023-12-01"),
            "KRW",
            FactValue::Number(-500_000.0),
        ),
    );
    report.facts.push(
        concept_name("Broken"),
        Fact::new(
            context_ref("not-a-date"),
            "KRW",
            FactValue::Invalid("abc".to_string()),
        ),
    );
    report
}

#[test]
fn report_round_trips_through_json() {
    let report = sample_report();
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: Report = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn report_json_uses_interchange_keys() {
    let json = serde_json::to_value(sample_report()).expect("serialize report");
    assert_eq!(json["header"]["reportDate"], "2024-01-31");
    let facts = &json["facts"]["Assets.FinancialValue.KOSPI_Samsung_Elec"];
    assert_eq!(facts[0]["contextRef"], "AsOf_2023-12-01");
    assert_eq!(facts[0]["value"], -500_000);
    assert_eq!(json["facts"]["Assets.FinancialValue.Broken"][0]["value"], "abc");
}

#[test]
fn infinite_values_round_trip_through_json() {
    let mut report = Report::new(ReportHeader::new("ifrs-full-2024", "FIN-INST-001", "2024-01-31"));
    report.facts.push(
        concept_name("Overflow"),
        Fact::new(
            context_ref("2023-01-01"),
            "KRW",
            FactValue::Number(f64::INFINITY),
        ),
    );
    report.facts.push(
        concept_name("Overflow"),
        Fact::new(
            context_ref("2023-01-02"),
            "KRW",
            FactValue::Number(f64::NEG_INFINITY),
        ),
    );

    let json = serde_json::to_value(&report).expect("serialize report");
    let facts = &json["facts"]["Assets.FinancialValue.Overflow"];
    assert_eq!(facts[0]["value"], "Infinity");
    assert_eq!(facts[1]["value"], "-Infinity");

    let round: Report = serde_json::from_value(json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn whole_numbers_serialize_without_fraction() {
    let json = serde_json::to_string(&sample_report()).expect("serialize report");
    assert!(json.contains(r#""value":-500000}"#));
}

#[test]
fn raw_record_serializes_camel_case() {
    let record = RawRecord::new("Cash_KRW", FactValue::Number(1.0), "2023-11-30");
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["assetId"], "Cash_KRW");
    assert_eq!(json["date"], "2023-11-30");
}

#[test]
fn summary_reports_failures() {
    let results = vec![
        ValidationRuleResult {
            rule_id: "R001-AssetSoundness".to_string(),
            description: "d".to_string(),
            passed: false,
            details: "x".to_string(),
        },
        ValidationRuleResult {
            rule_id: "R002-FilingDeadline".to_string(),
            description: "d".to_string(),
            passed: true,
            details: "x".to_string(),
        },
    ];
    let summary = ValidationSummary::from_results(&results);
    assert!(!summary.is_approved());
    assert_eq!(summary.by_rule.len(), 2);
}
