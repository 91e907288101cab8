//! Persistent configuration.
//!
//! The config file lives in the platform config folder unless `--config`
//! points elsewhere:
//! - macOS: ~/Library/Application Support/com.drr-simulator.DRR Simulator/
//! - Windows: %APPDATA%/drr-simulator/DRR Simulator/config/
//! - Linux: ~/.config/drrsimulator/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use drr_ingest::{HeaderMode, MAX_SOURCE_FILE_SIZE};
use drr_model::{DEFAULT_ENTITY, DEFAULT_TAXONOMY, DEFAULT_UNIT, ReportingProfile};
use drr_transmit::TransmissionConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "drr-simulator";
const APP_NAME: &str = "DRR Simulator";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrrConfig {
    pub reporting: ReportingConfig,
    pub ingest: IngestConfig,
    pub transmission: TransmissionConfig,
}

/// Identifiers stamped on every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    pub taxonomy: String,
    pub entity: String,
    /// ISO 4217 code used as the unit of every fact.
    pub unit: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            taxonomy: DEFAULT_TAXONOMY.to_string(),
            entity: DEFAULT_ENTITY.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl ReportingConfig {
    pub fn profile(&self) -> Result<ReportingProfile> {
        ReportingProfile::new(&self.taxonomy, &self.entity, &self.unit)
            .context("invalid [reporting] settings")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub header: HeaderMode,
    /// Largest input file accepted, in bytes.
    pub max_file_size: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            header: HeaderMode::Auto,
            max_file_size: MAX_SOURCE_FILE_SIZE,
        }
    }
}

/// Default config file location, if the platform has one.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load configuration.
///
/// An explicit path must exist. The default location may be absent, in
/// which case defaults are used. A file that exists but does not parse is
/// always an error.
pub fn load_config(explicit: Option<&Path>) -> Result<DrrConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }
    let Some(path) = config_path() else {
        debug!("no platform config directory, using defaults");
        return Ok(DrrConfig::default());
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DrrConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DrrConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: DrrConfig = toml::from_str(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    config
        .transmission
        .validate()
        .with_context(|| format!("invalid [transmission] in {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Write `config` to `path`, creating parent directories.
pub fn save_config(config: &DrrConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = render_config(config)?;
    fs::write(path, content).with_context(|| format!("write config {}", path.display()))?;
    info!(path = %path.display(), "saved config");
    Ok(())
}

pub fn render_config(config: &DrrConfig) -> Result<String> {
    toml::to_string_pretty(config).context("serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_filename() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(CONFIG_FILENAME));
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = DrrConfig::default();
        config.reporting.entity = "BANK-042".to_string();
        config.ingest.header = HeaderMode::Absent;
        config.transmission.latency_ms = 0;

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[transmission]\nsuccess_rate = 1.0\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.transmission.success_rate, 1.0);
        assert_eq!(config.transmission.latency_ms, 2000);
        assert_eq!(config.reporting, ReportingConfig::default());
        assert_eq!(config.ingest.header, HeaderMode::Auto);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[transmission]\nsuccess_rate = 3.0\n").unwrap();
        assert!(load_config_from(&path).is_err());

        fs::write(&path, "[ingest]\nheader = \"sometimes\"\n").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_bad_unit_fails_profile() {
        let reporting = ReportingConfig {
            unit: "won".to_string(),
            ..ReportingConfig::default()
        };
        assert!(reporting.profile().is_err());
        assert!(ReportingConfig::default().profile().is_ok());
    }
}
