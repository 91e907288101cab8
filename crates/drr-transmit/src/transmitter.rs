use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use drr_model::Report;

use crate::config::TransmissionConfig;
use crate::error::{Result, TransmissionError};

const ACCEPTED_MESSAGE: &str = "Report received successfully. Awaiting validation.";

/// Gateway acknowledgement for an accepted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionReceipt {
    pub status: u16,
    pub message: String,
}

impl TransmissionReceipt {
    pub fn accepted() -> Self {
        Self {
            status: 200,
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }
}

/// Sends a report to a regulator gateway.
#[async_trait]
pub trait Transmitter: Send + Sync {
    async fn transmit(&self, report: &Report) -> Result<TransmissionReceipt>;
}

/// Gateway stand-in with latency and random failures.
#[derive(Debug, Clone)]
pub struct SimulatedTransmitter {
    config: TransmissionConfig,
}

impl SimulatedTransmitter {
    pub fn new(config: TransmissionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TransmissionConfig {
        &self.config
    }
}

#[async_trait]
impl Transmitter for SimulatedTransmitter {
    async fn transmit(&self, report: &Report) -> Result<TransmissionReceipt> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(self.config.latency()).await;
        }
        let accepted = rand::rng().random_bool(self.config.success_rate);
        if accepted {
            info!(
                entity = %report.header.entity,
                fact_count = report.facts.fact_count(),
                "report accepted by gateway"
            );
            Ok(TransmissionReceipt::accepted())
        } else {
            warn!(entity = %report.header.entity, "gateway timed out");
            Err(TransmissionError::GatewayTimeout)
        }
    }
}

/// Transmitter that always accepts or always times out, without waiting.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcomeTransmitter {
    accept: bool,
}

impl FixedOutcomeTransmitter {
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn failing() -> Self {
        Self { accept: false }
    }
}

#[async_trait]
impl Transmitter for FixedOutcomeTransmitter {
    async fn transmit(&self, _report: &Report) -> Result<TransmissionReceipt> {
        if self.accept {
            Ok(TransmissionReceipt::accepted())
        } else {
            Err(TransmissionError::GatewayTimeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drr_model::ReportHeader;

    fn report() -> Report {
        Report::new(ReportHeader::new("t", "e", "2024-01-01"))
    }

    fn simulated(success_rate: f64) -> SimulatedTransmitter {
        SimulatedTransmitter::new(TransmissionConfig {
            latency_ms: 0,
            success_rate,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_certain_success() {
        let receipt = simulated(1.0).transmit(&report()).await.unwrap();
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.message, ACCEPTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_certain_failure() {
        let err = simulated(0.0).transmit(&report()).await.unwrap_err();
        assert_eq!(err, TransmissionError::GatewayTimeout);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let transmitter = SimulatedTransmitter::new(TransmissionConfig {
            latency_ms: 2000,
            success_rate: 1.0,
        })
        .unwrap();
        let start = tokio::time::Instant::now();
        transmitter.transmit(&report()).await.unwrap();
        assert!(start.elapsed() >= std::time::Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_fixed_outcomes() {
        assert!(FixedOutcomeTransmitter::accepting().transmit(&report()).await.is_ok());
        assert!(FixedOutcomeTransmitter::failing().transmit(&report()).await.is_err());
    }

    #[test]
    fn test_rejects_invalid_rate() {
        let result = SimulatedTransmitter::new(TransmissionConfig {
            latency_ms: 0,
            success_rate: 2.0,
        });
        assert!(matches!(result, Err(TransmissionError::InvalidSuccessRate(_))));
    }
}
