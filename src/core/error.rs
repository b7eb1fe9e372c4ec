//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A request body that is not the expected JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// An appliance field is missing, non-numeric or outside its domain
    #[error("Invalid input for {appliance}: {field} {reason}")]
    InvalidInput {
        appliance: String,
        field: String,
        reason: String,
    },

    /// The electricity cost is missing, non-numeric or not positive
    #[error("Invalid electricity cost: {0}")]
    InvalidCost(String),
}

impl Error {
    pub fn invalid_input(appliance: impl Into<String>, field: &str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            appliance: appliance.into(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's data rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. } | Error::InvalidCost(_) | Error::InvalidBody(_)
        )
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
