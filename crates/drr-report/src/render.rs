//! JSON preview of a standardized report.

use drr_model::Report;

use crate::error::Result;

/// Compact JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Indented JSON, as shown in the standardization preview.
pub fn render_json_pretty(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drr_model::ReportHeader;

    #[test]
    fn test_empty_report_json() {
        let report = Report::new(ReportHeader::new("t", "e", "2024-01-01"));
        assert_eq!(
            render_json(&report).unwrap(),
            r#"{"header":{"taxonomy":"t","entity":"e","reportDate":"2024-01-01"},"facts":{}}"#
        );
    }
}
