//! Report standardization.
//!
//! Groups raw records into a [`Report`] keyed by concept name
//! (`Assets.FinancialValue.<asset_id>`), one fact per record, and renders
//! the report as JSON for preview.
//!
//! The builder is pure: the report date comes from the `as_of` argument,
//! never from the system clock.
//!
//! [`Report`]: drr_model::Report

mod builder;
mod error;
mod render;

pub use builder::{ReportBuilder, ReportStats, build_report};
pub use error::{ReportError, Result};
pub use render::{render_json, render_json_pretty};
