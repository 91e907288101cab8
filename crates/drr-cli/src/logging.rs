//! Logging setup on top of `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: unrecoverable command failures
//! - `warn`: gateway timeouts, sample generator fallbacks
//! - `info`: pipeline stage completion with counts and timings
//! - `debug`: dropped input lines, per-stage details
//! - `trace`: per-record values (asset ids are redacted unless `--log-data`)
//!
//! `RUST_LOG` overrides the computed filter when no explicit verbosity flag
//! was passed.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const CRATE_TARGETS: &[&str] = &[
    "drr_cli",
    "drr_ingest",
    "drr_model",
    "drr_report",
    "drr_transmit",
    "drr_validate",
];

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged in place of record values.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when record-level logging is enabled, otherwise a placeholder.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the computed filter.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Allow record values (asset ids) in log output.
    pub log_data: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let filter = build_env_filter(config.level_filter, config.use_env_filter);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    let layer: Box<dyn Layer<Registry> + Send + Sync> =
        match (config.format, config.with_timestamps) {
            (LogFormat::Json, _) => layer.json().boxed(),
            (LogFormat::Compact, true) => layer.compact().with_ansi(config.with_ansi).boxed(),
            (LogFormat::Compact, false) => layer
                .compact()
                .with_ansi(config.with_ansi)
                .without_time()
                .boxed(),
            (LogFormat::Pretty, true) => layer.with_ansi(config.with_ansi).boxed(),
            (LogFormat::Pretty, false) => layer.with_ansi(config.with_ansi).without_time().boxed(),
        };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();
}

fn default_directives(level: LevelFilter) -> String {
    if level == LevelFilter::OFF {
        return "off".to_string();
    }
    let level = level.to_string().to_lowercase();
    // Dependencies stay at warn.
    let mut directives = String::from("warn");
    for target in CRATE_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

fn build_env_filter(level: LevelFilter, use_env: bool) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(level));
    if use_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_every_crate() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        for target in CRATE_TARGETS {
            assert!(directives.contains(&format!("{target}=debug")), "{target} missing");
        }
    }

    #[test]
    fn test_off_silences_everything() {
        assert_eq!(default_directives(LevelFilter::OFF), "off");
    }

    #[test]
    fn test_redaction_default() {
        assert!(!LogConfig::default().log_data);
        if !log_data_enabled() {
            assert_eq!(redact_value("KOSPI_Samsung_Elec"), REDACTED_VALUE);
        }
    }
}
