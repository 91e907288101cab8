//! Transmission of standardized reports to a regulator gateway.
//!
//! Nothing here talks to a real network. [`SimulatedTransmitter`] waits a
//! configurable latency and then succeeds with a configurable probability,
//! while [`FixedOutcomeTransmitter`] always gives the same answer.

mod config;
mod error;
mod transmitter;

pub use config::{DEFAULT_LATENCY_MS, DEFAULT_SUCCESS_RATE, TransmissionConfig};
pub use error::{Result, TransmissionError};
pub use transmitter::{
    FixedOutcomeTransmitter, SimulatedTransmitter, TransmissionReceipt, Transmitter,
};
