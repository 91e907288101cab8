use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("invalid currency code '{code}': expected three ASCII uppercase letters")]
    InvalidUnit { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
