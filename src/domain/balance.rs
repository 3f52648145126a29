//! Balance assignment
//!
//! Decides which side of an account carries its current balance, given the
//! accumulated beginning and movement figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance_nature::{account_class, classify_balance_nature, BalanceNature};

/// Accumulated debit and credit figures of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementTotals {
    pub beginning_debit: Decimal,
    pub beginning_credit: Decimal,
    pub movement_debit: Decimal,
    pub movement_credit: Decimal,
}

impl MovementTotals {
    pub fn new(
        beginning_debit: Decimal,
        beginning_credit: Decimal,
        movement_debit: Decimal,
        movement_credit: Decimal,
    ) -> Self {
        Self {
            beginning_debit,
            beginning_credit,
            movement_debit,
            movement_credit,
        }
    }

    /// Beginning plus movement debits
    pub fn total_debit(&self) -> Decimal {
        self.beginning_debit + self.movement_debit
    }

    /// Beginning plus movement credits
    pub fn total_credit(&self) -> Decimal {
        self.beginning_credit + self.movement_credit
    }
}

/// Rule used to pick the balance side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalancePolicy {
    /// Compares period movements only (branch chart mapping)
    BranchMovement,
    /// Compares beginning plus movement totals (legacy migration)
    Cumulative,
}

/// Balance fields resulting from an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignedBalances {
    pub credit_balance: Decimal,
    pub debit_balance: Decimal,
    pub beginning_balance: Decimal,
}

/// Assign `current_balance` to the debit or credit side under `policy`.
///
/// A side only receives the balance when it is strictly greater than the
/// other one; equal figures leave both sides at zero.
pub fn assign_balance(
    totals: &MovementTotals,
    current_balance: Decimal,
    policy: BalancePolicy,
) -> AssignedBalances {
    let (debit_balance, credit_balance) = match policy {
        BalancePolicy::BranchMovement => branch_movement_sides(totals, current_balance),
        BalancePolicy::Cumulative => cumulative_sides(totals, current_balance),
    };

    AssignedBalances {
        credit_balance,
        debit_balance,
        beginning_balance: totals.beginning_credit.max(totals.beginning_debit),
    }
}

/// Returns `(debit, credit)` from the movement comparison.
fn branch_movement_sides(totals: &MovementTotals, current_balance: Decimal) -> (Decimal, Decimal) {
    let credit = if totals.movement_credit > totals.movement_debit {
        current_balance
    } else {
        Decimal::ZERO
    };
    let debit = if totals.movement_debit > totals.movement_credit {
        current_balance
    } else {
        Decimal::ZERO
    };
    (debit, credit)
}

/// Returns `(debit, credit)` from the cumulative comparison.
fn cumulative_sides(totals: &MovementTotals, current_balance: Decimal) -> (Decimal, Decimal) {
    let total_debit = totals.total_debit();
    let total_credit = totals.total_credit();

    if total_debit > total_credit {
        (current_balance, Decimal::ZERO)
    } else if total_credit > total_debit {
        (Decimal::ZERO, current_balance)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    }
}

/// Balance fields read by [`determine_balance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub beginning_balance_debit: Decimal,
    pub beginning_balance_credit: Decimal,
    pub current_balance: Decimal,
    pub debit_balance: Decimal,
    pub credit_balance: Decimal,
}

/// Net balance of an account from its class.
///
/// Classes 2, 5 and 6 are normally debit, classes 1, 3 and 7 normally
/// credit. Other classes fall back on [`classify_balance_nature`]. The
/// result is never negative.
pub fn determine_balance(account_number: &str, snapshot: &BalanceSnapshot) -> Decimal {
    let balance = match account_number.chars().next() {
        Some('2' | '5' | '6') => snapshot.beginning_balance_debit,
        Some('1' | '7' | '3') => snapshot.beginning_balance_credit,
        _ => {
            let nature = account_class(account_number)
                .map(classify_balance_nature)
                .unwrap_or(BalanceNature::Unknown);

            if nature == BalanceNature::Credit {
                snapshot.current_balance - snapshot.credit_balance + snapshot.debit_balance
            } else {
                snapshot.current_balance - snapshot.debit_balance + snapshot.credit_balance
            }
        }
    };

    balance.max(Decimal::ZERO)
}
