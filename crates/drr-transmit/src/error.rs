use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransmissionError {
    #[error("503 Service unavailable: gateway timeout")]
    GatewayTimeout,

    #[error("success rate must be between 0 and 1, got {0}")]
    InvalidSuccessRate(f64),
}

impl TransmissionError {
    /// HTTP-style status code the gateway would have answered with.
    pub fn status(&self) -> u16 {
        match self {
            Self::GatewayTimeout => 503,
            Self::InvalidSuccessRate(_) => 400,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransmissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransmissionError::GatewayTimeout.to_string(),
            "503 Service unavailable: gateway timeout"
        );
        assert_eq!(
            TransmissionError::InvalidSuccessRate(1.5).to_string(),
            "success rate must be between 0 and 1, got 1.5"
        );
        assert_eq!(TransmissionError::GatewayTimeout.status(), 503);
    }
}
