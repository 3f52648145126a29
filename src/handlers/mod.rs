//! Command Handlers module
//!
//! CQRS-style command handlers that build accounts for the configured bank.

mod account_handler;
mod commands;


pub use account_handler::AccountHandler;
pub use commands::*;
