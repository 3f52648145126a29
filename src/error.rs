//! Error handling module
//!
//! Centralized error types for the handlers and the binary.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for the error
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;

        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::Domain(domain_err) => match domain_err {
                DomainError::InvalidIbanCharacter { .. } => "invalid_iban_character",
                DomainError::EmptyIbanInput => "empty_iban_input",
                DomainError::UnknownStatus(_) => "unknown_status",
            },
            AppError::Config(_) => "config_error",
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::InvalidRequest(_) => true,
            AppError::Domain(domain_err) => domain_err.is_client_error(),
            AppError::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_is_transparent() {
        let err: AppError = DomainError::invalid_iban_character('*', 3).into();

        assert_eq!(err.to_string(), "Invalid IBAN character '*' at position 3");
        assert_eq!(err.error_code(), "invalid_iban_character");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_config_error_is_server_side() {
        let err: AppError = ConfigError::MissingEnv("BANK_CODE").into();

        assert_eq!(err.error_code(), "config_error");
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("BANK_CODE"));
    }
}
