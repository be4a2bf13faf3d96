/// Library-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Caller supplied a payload that breaks the component contract
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Shipping estimate errors (bad response, GraphQL errors)
    #[error("Shipping error: {0}")]
    Shipping(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from the command-line host
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn contract(msg: impl Into<String>) -> Self {
        AppError::ContractViolation(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn shipping(msg: impl Into<String>) -> Self {
        AppError::Shipping(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True when the error was caused by the caller's payload
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, AppError::ContractViolation(_))
    }
}
