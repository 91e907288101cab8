use drr_model::FactValue;

use super::{FactContext, Rule, RuleOutcome};
use crate::format::format_grouped;

/// R001: reported asset values must be numbers `>= 0`.
///
/// Non-numeric values and NaN fail, since they cannot be shown to be
/// non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeValue;

impl NonNegativeValue {
    pub const ID: &'static str = "R001-AssetSoundness";
}

impl Rule for NonNegativeValue {
    fn id(&self) -> &str {
        Self::ID
    }

    fn describe(&self, concept: &str) -> String {
        format!("Asset value check for {concept}")
    }

    fn check(&self, context: &FactContext<'_>) -> RuleOutcome {
        match &context.fact.value {
            FactValue::Number(value) if *value >= 0.0 => {
                RuleOutcome::pass(format!("Value {} is valid.", format_grouped(*value)))
            }
            FactValue::Number(value) => RuleOutcome::fail(format!(
                "Value {} is invalid (must be 0 or greater).",
                format_grouped(*value)
            )),
            FactValue::Invalid(raw) => RuleOutcome::fail(format!(
                "Value '{raw}' is not a number (must be 0 or greater)."
            )),
        }
    }
}
