use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransmissionError};

pub const DEFAULT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Behaviour of the simulated gateway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransmissionConfig {
    /// Delay before the gateway answers, in milliseconds.
    pub latency_ms: u64,
    /// Probability in `[0, 1]` that a transmission is accepted.
    pub success_rate: f64,
}

impl Default for TransmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

impl TransmissionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.success_rate) {
            Ok(())
        } else {
            Err(TransmissionError::InvalidSuccessRate(self.success_rate))
        }
    }
}
