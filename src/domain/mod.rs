//! Domain module
//!
//! Pure account identity and balance classification rules.

pub mod balance;
pub mod balance_nature;
pub mod error;
pub mod iban;
pub mod numbering;

pub use balance::{
    assign_balance, determine_balance, AssignedBalances, BalancePolicy, BalanceSnapshot,
    MovementTotals,
};
pub use balance_nature::{account_class, classify_balance_nature, BalanceNature};
pub use error::DomainError;
pub use iban::{compute_iban, iban_check_digits};
pub use numbering::{
    build_cu_number, build_liaison_number, build_network_number, build_reference_number,
    compose_account_number_fields, pad_right, prefix, prefix_opt, AccountNumberFields,
    CompositionProfile, CuNumberSource, NetworkNumberVariant, ReferenceNumberVariant,
};
