//! Account Handler
//!
//! Turns account commands into fully composed `Account` entities for the
//! configured bank.

use crate::aggregate::{Account, AccountIdentity};
use crate::config::Config;
use crate::domain::compute_iban;
use crate::error::{AppError, AppResult};

use super::{
    MapBranchAccountCommand, MigrateAccountCommand, OpenAccountCommand,
    OpenLiaisonAccountCommand,
};

/// Handler for the account factory commands
#[derive(Debug, Clone)]
pub struct AccountHandler {
    bank_code: String,
    default_branch_code: String,
    iban_country_code: String,
}

impl AccountHandler {
    pub fn new(bank_code: String, default_branch_code: String, iban_country_code: String) -> Self {
        Self {
            bank_code,
            default_branch_code,
            iban_country_code,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.bank_code.clone(),
            config.branch_code.clone(),
            config.iban_country_code.clone(),
        )
    }

    /// Open an ordinary account
    pub fn open_account(&self, command: OpenAccountCommand) -> AppResult<Account> {
        require("account_number", &command.account_number)?;
        require("account_name", &command.account_name)?;

        let identity = self.identity(
            command.account_number,
            command.management_position,
            command.branch_code,
        );
        let account = Account::open_ordinary(command.account_name, identity);

        tracing::info!(
            account_id = %account.id(),
            network = %account.account_number_network(),
            "Ordinary account opened"
        );

        Ok(account)
    }

    /// Open a liaison account towards a counterpart branch
    pub fn open_liaison_account(&self, command: OpenLiaisonAccountCommand) -> AppResult<Account> {
        require("chart_account", &command.chart_account)?;
        require("counterpart_branch_code", &command.counterpart_branch_code)?;
        require("account_name", &command.account_name)?;

        let identity = self.identity(
            command.chart_account,
            command.management_position,
            command.branch_code,
        );

        if identity.branch_code == command.counterpart_branch_code {
            tracing::warn!(
                branch_code = %identity.branch_code,
                "Liaison account opened towards its own branch"
            );
        }

        let account = Account::open_liaison(
            command.account_name,
            identity,
            &command.counterpart_branch_code,
        );

        tracing::info!(
            account_id = %account.id(),
            account_number = %account.account_number(),
            "Liaison account opened"
        );

        Ok(account)
    }

    /// Map an account onto a branch chart, splitting its balances on movements
    pub fn map_branch_account(&self, command: MapBranchAccountCommand) -> AppResult<Account> {
        require("account_number", &command.account_number)?;
        require("branch_code", &command.branch_code)?;
        require("account_name", &command.account_name)?;

        let identity = AccountIdentity::new(
            command.account_number,
            command.management_position,
            command.branch_code,
            self.bank_code.clone(),
        );
        let account = Account::open_branch_mapped(
            command.account_name,
            identity,
            command.totals,
            command.current_balance,
        );

        tracing::info!(
            account_id = %account.id(),
            network = %account.account_number_network(),
            debit_balance = %account.debit_balance(),
            credit_balance = %account.credit_balance(),
            "Branch account mapped"
        );

        Ok(account)
    }

    /// Migrate a legacy account, keeping its CU number
    pub fn migrate_account(&self, command: MigrateAccountCommand) -> AppResult<Account> {
        require("account_number", &command.account_number)?;
        require("account_name", &command.account_name)?;

        if command.legacy_cu_number.is_empty() {
            tracing::warn!(
                account_number = %command.account_number,
                "Migrated account has no legacy CU number"
            );
        }

        let identity = self.identity(
            command.account_number,
            command.management_position,
            command.branch_code,
        );
        let account = Account::open_migrated(
            command.account_name,
            identity,
            command.legacy_cu_number,
            command.totals,
            command.current_balance,
        );

        tracing::info!(
            account_id = %account.id(),
            cu = %account.account_number_cu(),
            debit_balance = %account.debit_balance(),
            credit_balance = %account.credit_balance(),
            "Legacy account migrated"
        );

        Ok(account)
    }

    /// IBAN of an account under the configured country code
    pub fn iban_for(&self, account: &Account) -> AppResult<String> {
        let iban = compute_iban(
            &self.iban_country_code,
            account.bank_code(),
            account.account_number(),
        )?;

        tracing::debug!(account_id = %account.id(), "IBAN computed");
        Ok(iban)
    }

    fn identity(
        &self,
        account_number: String,
        management_position: String,
        branch_code: Option<String>,
    ) -> AccountIdentity {
        AccountIdentity::new(
            account_number,
            management_position,
            branch_code.unwrap_or_else(|| self.default_branch_code.clone()),
            self.bank_code.clone(),
        )
    }
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}
