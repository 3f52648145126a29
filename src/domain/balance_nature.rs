//! Balance nature
//!
//! Normal balance side of the OHADA third-party account classes (40-49).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected balance side of an account class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceNature {
    Debit,
    Credit,
    /// Either side is normal (payment instruments, members)
    Mixed,
    Unknown,
}

impl BalanceNature {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceNature::Debit => "Debit",
            BalanceNature::Credit => "Credit",
            BalanceNature::Mixed => "Mixed",
            BalanceNature::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BalanceNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a two-digit OHADA account class.
///
/// Unmapped classes yield [`BalanceNature::Unknown`].
pub fn classify_balance_nature(class: u8) -> BalanceNature {
    match class {
        40 => BalanceNature::Debit,  // Suppliers
        41 => BalanceNature::Mixed,  // Payment instruments
        42 => BalanceNature::Credit, // Personnel
        43 => BalanceNature::Debit,  // State
        44 => BalanceNature::Mixed,  // Shareholders / members
        45 => BalanceNature::Credit, // Liaison accounts
        46 => BalanceNature::Debit,  // Other debtors / creditors
        47 => BalanceNature::Debit,  // Regularization accounts
        48 => BalanceNature::Debit,  // Doubtful receivables
        49 => BalanceNature::Credit, // Provisions
        _ => BalanceNature::Unknown,
    }
}

/// Read the two-digit account class from the leading digits of an account number.
pub fn account_class(account_number: &str) -> Option<u8> {
    let mut digits = account_number.chars().map(|c| c.to_digit(10));
    match (digits.next(), digits.next()) {
        (Some(Some(tens)), Some(Some(units))) => Some((tens * 10 + units) as u8),
        _ => None,
    }
}
