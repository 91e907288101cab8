//! Library side of the DRR Simulator CLI: configuration, logging, the staged
//! reporting pipeline and terminal output.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
