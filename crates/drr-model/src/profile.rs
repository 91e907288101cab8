//! Reporting profile and the fixed identifiers used to name facts.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Taxonomy identifier written into every report header.
pub const DEFAULT_TAXONOMY: &str = "ifrs-full-2024";
/// Reporting entity identifier written into every report header.
pub const DEFAULT_ENTITY: &str = "FIN-INST-001";
/// Currency code used as `unitRef` for every fact.
pub const DEFAULT_UNIT: &str = "KRW";
/// Prefix of every concept name.
pub const CONCEPT_PREFIX: &str = "Assets.FinancialValue.";
/// Prefix of every `contextRef`.
pub const CONTEXT_PREFIX: &str = "AsOf_";
/// Decimal precision recorded on every fact.
pub const FACT_DECIMALS: i32 = 0;

/// Concept name for an asset: `Assets.FinancialValue.<asset_id>`.
pub fn concept_name(asset_id: &str) -> String {
    format!("{CONCEPT_PREFIX}{asset_id}")
}

/// Context reference for a reporting date: `AsOf_<date>`.
pub fn context_ref(date: &str) -> String {
    format!("{CONTEXT_PREFIX}{date}")
}

/// Date portion of a context reference.
///
/// References without the `AsOf_` prefix are returned unchanged.
pub fn context_date(context_ref: &str) -> &str {
    context_ref
        .strip_prefix(CONTEXT_PREFIX)
        .unwrap_or(context_ref)
}

/// Header and unit settings applied by the report builder.
///
/// These are configuration, never derived from input rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingProfile {
    pub taxonomy: String,
    pub entity: String,
    pub unit: String,
}

impl Default for ReportingProfile {
    fn default() -> Self {
        Self {
            taxonomy: DEFAULT_TAXONOMY.to_string(),
            entity: DEFAULT_ENTITY.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl ReportingProfile {
    /// Build a profile, checking that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns an error when a field is blank or the unit is not a
    /// three-letter uppercase currency code.
    pub fn new(
        taxonomy: impl Into<String>,
        entity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Result<Self> {
        let profile = Self {
            taxonomy: taxonomy.into().trim().to_string(),
            entity: entity.into().trim().to_string(),
            unit: unit.into().trim().to_string(),
        };
        if profile.taxonomy.is_empty() {
            return Err(ModelError::EmptyField { field: "taxonomy" });
        }
        if profile.entity.is_empty() {
            return Err(ModelError::EmptyField { field: "entity" });
        }
        if profile.unit.len() != 3 || !profile.unit.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ModelError::InvalidUnit { code: profile.unit });
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_prefixed() {
        assert_eq!(concept_name("Samsung"), "Assets.FinancialValue.Samsung");
        assert_eq!(context_ref("2023-12-01"), "AsOf_2023-12-01");
    }

    #[test]
    fn context_date_strips_prefix_only_once() {
        assert_eq!(context_date("AsOf_2023-12-01"), "2023-12-01");
        assert_eq!(context_date("2023-12-01"), "2023-12-01");
        assert_eq!(context_date("AsOf_AsOf_x"), "AsOf_x");
    }

    #[test]
    fn profile_rejects_bad_unit() {
        let err = ReportingProfile::new("t", "e", "krw").unwrap_err();
        assert!(matches!(err, ModelError::InvalidUnit { .. }));
        assert!(ReportingProfile::new("t", "e", "USD").is_ok());
    }

    #[test]
    fn profile_rejects_blank_fields() {
        let err = ReportingProfile::new("  ", "e", "USD").unwrap_err();
        assert_eq!(err.to_string(), "taxonomy must not be empty");
    }
}
