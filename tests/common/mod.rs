//! Common test utilities

use ohada_accounts::handlers::AccountHandler;
use ohada_accounts::{AccountIdentity, MovementTotals};
use rust_decimal::Decimal;

pub const BANK_CODE: &str = "010";
pub const BRANCH_CODE: &str = "002";
pub const COUNTRY_CODE: &str = "CM";

/// Handler bound to the test bank
pub fn test_handler() -> AccountHandler {
    AccountHandler::new(
        BANK_CODE.to_string(),
        BRANCH_CODE.to_string(),
        COUNTRY_CODE.to_string(),
    )
}

/// Identity at the test bank and branch
pub fn identity(account_number: &str, management_position: &str) -> AccountIdentity {
    AccountIdentity::new(account_number, management_position, BRANCH_CODE, BANK_CODE)
}

/// Totals from whole-unit figures
pub fn totals(
    beginning_debit: i64,
    beginning_credit: i64,
    movement_debit: i64,
    movement_credit: i64,
) -> MovementTotals {
    MovementTotals::new(
        Decimal::from(beginning_debit),
        Decimal::from(beginning_credit),
        Decimal::from(movement_debit),
        Decimal::from(movement_credit),
    )
}
