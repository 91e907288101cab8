//! Export of validation results for display or archiving.

use std::io::Write;

use thiserror::Error;

use drr_model::ValidationRuleResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV results: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to flush results: {0}")]
    Io(#[from] std::io::Error),
}

/// Write results as CSV with a `ruleId,description,passed,details` header.
pub fn write_results_csv<W: Write>(
    writer: W,
    results: &[ValidationRuleResult],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if results.is_empty() {
        csv_writer.write_record(["ruleId", "description", "passed", "details"])?;
    }
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write results as a pretty-printed JSON array.
pub fn write_results_json<W: Write>(
    mut writer: W,
    results: &[ValidationRuleResult],
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(passed: bool, details: &str) -> ValidationRuleResult {
        ValidationRuleResult {
            rule_id: "R001-AssetSoundness".to_string(),
            description: "Asset value check for Assets.FinancialValue.Cash".to_string(),
            passed,
            details: details.to_string(),
        }
    }

    #[test]
    fn test_csv_has_header_and_quotes_commas() {
        let mut out = Vec::new();
        write_results_csv(
            &mut out,
            &[result(false, "Value -500,000 is invalid (must be 0 or greater).")],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ruleId,description,passed,details\n\
             R001-AssetSoundness,Asset value check for Assets.FinancialValue.Cash,false,\
             \"Value -500,000 is invalid (must be 0 or greater).\"\n"
        );
    }

    #[test]
    fn test_csv_empty_still_has_header() {
        let mut out = Vec::new();
        write_results_csv(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ruleId,description,passed,details\n");
    }

    #[test]
    fn test_json_array() {
        let mut out = Vec::new();
        write_results_json(&mut out, &[result(true, "Value 1 is valid.")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["ruleId"], "R001-AssetSoundness");
        assert_eq!(parsed[0]["passed"], true);
    }
}
