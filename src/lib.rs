//! OHADA accounts library
//!
//! Account numbering, balance classification and IBAN computation for the
//! core-banking back office.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
mod error;

pub use aggregate::{Account, AccountIdentity, AccountMappingStatus, AccountStatus};
pub use config::Config;
pub use domain::{BalanceNature, BalancePolicy, CompositionProfile, DomainError, MovementTotals};
pub use error::{AppError, AppResult};
