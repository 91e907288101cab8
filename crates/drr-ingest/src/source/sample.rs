//! Built-in sample datasets and the generator-with-fallback source.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{IngestError, Result};

use super::RawTextSource;

const DEFAULT_DATA: &str = "KOSPI_Samsung_Elec, 75000000, 2023-12-15
KOSPI_SK_Hynix, 54000000, 2023-11-20
Bond_Gov_KR_10Y, 62000000, 2023-10-05
ETF_KODEX_Lev, 31000000, 2023-09-12
Cash_KRW, 15000000, 2023-11-30";

const CLEAN_FALLBACK: &str = "KOSPI_Samsung_Elec, 75000000, 2023-12-01
KOSPI_SK_Hynix, 12500000, 2023-11-15
Bond_KR_Gov_10Y, 500000000, 2023-10-20
ETF_KODEX_200, 3000000, 2023-12-10
Cash_KRW_Reserve, 100000000, 2023-11-30";

const DIRTY_FALLBACK: &str = "KOSPI_Samsung_Elec, -500000, 2023-12-01
Future_Asset_Error, 1000000, 2025-01-01
Valid_Asset_A, 500000, 2023-11-20";

/// Kind of data a generator is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Positive values dated in the past.
    #[default]
    Clean,
    /// At least one negative value and one future date.
    Dirty,
}

/// Static example datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleDataset {
    /// The pre-filled example shown before any data is entered.
    Default,
    /// Fallback for a clean generation request.
    Clean,
    /// Fallback for a dirty generation request.
    Dirty,
}

impl SampleDataset {
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Clean, Self::Dirty]
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_DATA,
            Self::Clean => CLEAN_FALLBACK,
            Self::Dirty => DIRTY_FALLBACK,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Clean => "clean",
            Self::Dirty => "dirty",
        }
    }

    /// Fallback dataset for a generator scenario.
    pub const fn fallback_for(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Clean => Self::Clean,
            Scenario::Dirty => Self::Dirty,
        }
    }
}

/// Serves one of the static datasets.
#[derive(Debug, Clone, Copy)]
pub struct SampleSource {
    dataset: SampleDataset,
}

impl SampleSource {
    pub fn new(dataset: SampleDataset) -> Self {
        Self { dataset }
    }
}

impl RawTextSource for SampleSource {
    fn name(&self) -> &str {
        self.dataset.label()
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.dataset.text().to_string())
    }
}

/// Opaque generator of sample CSV text (e.g. a remote model).
pub trait SampleProvider {
    fn name(&self) -> &str;

    fn generate(&self, scenario: Scenario) -> Result<String>;
}

/// Provider used when no generator is configured; always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

impl SampleProvider for UnavailableProvider {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn generate(&self, _scenario: Scenario) -> Result<String> {
        Err(IngestError::Provider {
            source_name: self.name().to_string(),
            message: "no sample generator is configured".to_string(),
        })
    }
}

/// Asks a provider for data and falls back to a static dataset on failure.
///
/// Blank provider output counts as a failure.
#[derive(Debug, Clone)]
pub struct FallbackSource<P> {
    provider: P,
    scenario: Scenario,
}

impl<P: SampleProvider> FallbackSource<P> {
    pub fn new(provider: P, scenario: Scenario) -> Self {
        Self { provider, scenario }
    }
}

impl<P: SampleProvider> RawTextSource for FallbackSource<P> {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn read_text(&self) -> Result<String> {
        let fallback = SampleDataset::fallback_for(self.scenario);
        match self.provider.generate(self.scenario) {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => {
                warn!(
                    provider = self.provider.name(),
                    fallback = fallback.label(),
                    "provider returned no data, using fallback dataset"
                );
                Ok(fallback.text().to_string())
            }
            Err(error) => {
                warn!(
                    provider = self.provider.name(),
                    fallback = fallback.label(),
                    %error,
                    "provider failed, using fallback dataset"
                );
                Ok(fallback.text().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(&'static str);

    impl SampleProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate(&self, _scenario: Scenario) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_fallback_on_provider_error() {
        let source = FallbackSource::new(UnavailableProvider, Scenario::Dirty);
        assert_eq!(source.read_text().unwrap(), DIRTY_FALLBACK);
    }

    #[test]
    fn test_fallback_on_blank_output() {
        let source = FallbackSource::new(FixedProvider("  \n"), Scenario::Clean);
        assert_eq!(source.read_text().unwrap(), CLEAN_FALLBACK);
    }

    #[test]
    fn test_provider_output_is_used() {
        let source = FallbackSource::new(FixedProvider("A, 1, 2023-01-01\n"), Scenario::Clean);
        assert_eq!(source.read_text().unwrap(), "A, 1, 2023-01-01");
        assert_eq!(source.name(), "fixed");
    }

    #[test]
    fn test_sample_source_labels() {
        for dataset in SampleDataset::all() {
            let source = SampleSource::new(*dataset);
            assert_eq!(source.name(), dataset.label());
            assert!(!source.read_text().unwrap().is_empty());
        }
    }
}
