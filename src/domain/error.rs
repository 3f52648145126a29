//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// The numbering and balance rules are total functions; only IBAN
/// computation and status parsing can reject their input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A character that has no IBAN numeric substitution
    #[error("Invalid IBAN character '{character}' at position {position}")]
    InvalidIbanCharacter { character: char, position: usize },

    /// Country code, bank code and account number were all empty
    #[error("IBAN input is empty")]
    EmptyIbanInput,

    /// A status string that does not name a known status
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

impl DomainError {
    /// Create an invalid IBAN character error
    pub fn invalid_iban_character(character: char, position: usize) -> Self {
        Self::InvalidIbanCharacter {
            character,
            position,
        }
    }

    /// Check if this is a client error (caller supplied bad input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIbanCharacter { .. } | Self::EmptyIbanInput | Self::UnknownStatus(_)
        )
    }
}
