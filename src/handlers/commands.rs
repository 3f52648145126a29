//! Command definitions
//!
//! Commands represent intentions to create accounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::MovementTotals;

// =========================================================================
// OpenAccountCommand
// =========================================================================

/// Command to open an ordinary account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountCommand {
    pub account_name: String,
    pub account_number: String,
    pub management_position: String,
    /// Falls back to the configured branch
    pub branch_code: Option<String>,
}

impl OpenAccountCommand {
    pub fn new(account_name: String, account_number: String, management_position: String) -> Self {
        Self {
            account_name,
            account_number,
            management_position,
            branch_code: None,
        }
    }

    pub fn with_branch_code(mut self, branch_code: String) -> Self {
        self.branch_code = Some(branch_code);
        self
    }
}

// =========================================================================
// OpenLiaisonAccountCommand
// =========================================================================

/// Command to open the liaison account towards another branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenLiaisonAccountCommand {
    pub account_name: String,
    /// Liaison chart account, usually `451`
    pub chart_account: String,
    pub counterpart_branch_code: String,
    pub management_position: String,
    pub branch_code: Option<String>,
}

impl OpenLiaisonAccountCommand {
    pub fn new(
        account_name: String,
        chart_account: String,
        counterpart_branch_code: String,
    ) -> Self {
        Self {
            account_name,
            chart_account,
            counterpart_branch_code,
            management_position: String::new(),
            branch_code: None,
        }
    }

    pub fn with_management_position(mut self, management_position: String) -> Self {
        self.management_position = management_position;
        self
    }

    pub fn with_branch_code(mut self, branch_code: String) -> Self {
        self.branch_code = Some(branch_code);
        self
    }
}

// =========================================================================
// MapBranchAccountCommand
// =========================================================================

/// Command to map an account, with its balances, onto a branch chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapBranchAccountCommand {
    pub account_name: String,
    pub account_number: String,
    pub management_position: String,
    pub branch_code: String,
    pub totals: MovementTotals,
    pub current_balance: Decimal,
}

impl MapBranchAccountCommand {
    pub fn new(
        account_name: String,
        account_number: String,
        management_position: String,
        branch_code: String,
    ) -> Self {
        Self {
            account_name,
            account_number,
            management_position,
            branch_code,
            totals: MovementTotals::default(),
            current_balance: Decimal::ZERO,
        }
    }

    pub fn with_balances(mut self, totals: MovementTotals, current_balance: Decimal) -> Self {
        self.totals = totals;
        self.current_balance = current_balance;
        self
    }
}

// =========================================================================
// MigrateAccountCommand
// =========================================================================

/// Command to bring a legacy account over with its CU number and balances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrateAccountCommand {
    pub account_name: String,
    pub account_number: String,
    pub management_position: String,
    pub branch_code: Option<String>,
    /// CU number in the source system
    pub legacy_cu_number: String,
    pub totals: MovementTotals,
    pub current_balance: Decimal,
}

impl MigrateAccountCommand {
    pub fn new(
        account_name: String,
        account_number: String,
        management_position: String,
        legacy_cu_number: String,
    ) -> Self {
        Self {
            account_name,
            account_number,
            management_position,
            branch_code: None,
            legacy_cu_number,
            totals: MovementTotals::default(),
            current_balance: Decimal::ZERO,
        }
    }

    pub fn with_branch_code(mut self, branch_code: String) -> Self {
        self.branch_code = Some(branch_code);
        self
    }

    pub fn with_balances(mut self, totals: MovementTotals, current_balance: Decimal) -> Self {
        self.totals = totals;
        self.current_balance = current_balance;
        self
    }
}
