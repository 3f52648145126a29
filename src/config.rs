//! Configuration module
//!
//! Loads the bank context from environment variables.

use std::env;

use crate::domain::NetworkNumberVariant;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bank code stamped into network numbers and IBANs
    pub bank_code: String,

    /// Branch code used when a command does not name one
    pub branch_code: String,

    /// Country code prefixed to computed IBANs
    pub iban_country_code: String,

    /// Network number width for ad-hoc composition from the CLI
    pub network_variant: NetworkNumberVariant,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bank_code = env::var("BANK_CODE").map_err(|_| ConfigError::MissingEnv("BANK_CODE"))?;
        if bank_code.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BANK_CODE"));
        }

        let branch_code = env::var("BRANCH_CODE").unwrap_or_else(|_| "001".to_string());

        let iban_country_code =
            env::var("IBAN_COUNTRY_CODE").unwrap_or_else(|_| "CM".to_string());
        if iban_country_code.len() != 2
            || !iban_country_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::InvalidValue("IBAN_COUNTRY_CODE"));
        }

        let network_variant = parse_network_variant(
            &env::var("NETWORK_NUMBER_VARIANT").unwrap_or_else(|_| "standard".to_string()),
        )?;

        Ok(Self {
            bank_code,
            branch_code,
            iban_country_code,
            network_variant,
        })
    }
}

fn parse_network_variant(value: &str) -> Result<NetworkNumberVariant, ConfigError> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(NetworkNumberVariant::Standard),
        "extended" => Ok(NetworkNumberVariant::Extended),
        _ => Err(ConfigError::InvalidValue("NETWORK_NUMBER_VARIANT")),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
