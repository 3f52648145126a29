//! Aggregate module
//!
//! Account entity and the factories that create it.

pub mod account;

pub use account::{Account, AccountIdentity, AccountMappingStatus, AccountStatus};
