//! Account Aggregate
//!
//! Account identity and balance fields of a core-banking ledger account.
//! Composite identifiers are derived from the raw number, management
//! position, branch code and bank code, and are recomputed whenever one of
//! those inputs changes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{
    account_class, assign_balance, build_liaison_number, classify_balance_nature,
    compose_account_number_fields, determine_balance, numbering, BalanceNature, BalancePolicy,
    BalanceSnapshot, CompositionProfile, DomainError, MovementTotals,
};

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Blocked,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Blocked => "Blocked",
            AccountStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AccountStatus::Active),
            "Inactive" => Ok(AccountStatus::Inactive),
            "Blocked" => Ok(AccountStatus::Blocked),
            "Closed" => Ok(AccountStatus::Closed),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Whether the account has been mapped onto a branch chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountMappingStatus {
    #[default]
    NotMapped,
    Mapped,
    Migrated,
}

impl AccountMappingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountMappingStatus::NotMapped => "NotMapped",
            AccountMappingStatus::Mapped => "Mapped",
            AccountMappingStatus::Migrated => "Migrated",
        }
    }
}

impl fmt::Display for AccountMappingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountMappingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotMapped" => Ok(AccountMappingStatus::NotMapped),
            "Mapped" => Ok(AccountMappingStatus::Mapped),
            "Migrated" => Ok(AccountMappingStatus::Migrated),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Raw inputs every composite identifier is derived from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub account_number: String,
    pub management_position: String,
    pub branch_code: String,
    pub bank_code: String,
}

impl AccountIdentity {
    pub fn new(
        account_number: impl Into<String>,
        management_position: impl Into<String>,
        branch_code: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            management_position: management_position.into(),
            branch_code: branch_code.into(),
            bank_code: bank_code.into(),
        }
    }
}

/// Account Aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: Uuid,
    account_name: String,

    // Raw identity
    account_number: String,
    account_number_management_position: String,
    branch_code: String,
    bank_code: String,

    // Derived identity
    account_number_network: String,
    account_number_reference: String,
    account_number_cu: String,
    account1: String,
    account2: String,
    account3: String,
    account4: String,
    account5: String,
    account6: String,

    // Balances
    beginning_balance: Decimal,
    beginning_balance_debit: Decimal,
    beginning_balance_credit: Decimal,
    current_balance: Decimal,
    debit_balance: Decimal,
    credit_balance: Decimal,
    last_balance: Decimal,

    account_mapping_status: AccountMappingStatus,
    status: AccountStatus,

    /// Composition rules of the factory that created the account
    profile: CompositionProfile,

    created_at: DateTime<Utc>,
}

impl Account {
    // =========================================================================
    // Factories
    // =========================================================================

    /// Ordinary member or ledger account, opened with zero balances.
    pub fn open_ordinary(account_name: String, identity: AccountIdentity) -> Self {
        Self::build(
            account_name,
            identity,
            CompositionProfile::ordinary(),
            AccountMappingStatus::NotMapped,
        )
    }

    /// Liaison account of the home branch towards `counterpart_branch_code`.
    ///
    /// `identity.account_number` holds the chart account (e.g. `451`); the
    /// stored number is the chart account suffixed with the counterpart branch.
    pub fn open_liaison(
        account_name: String,
        mut identity: AccountIdentity,
        counterpart_branch_code: &str,
    ) -> Self {
        identity.account_number =
            build_liaison_number(&identity.account_number, counterpart_branch_code);

        Self::build(
            account_name,
            identity,
            CompositionProfile::liaison(),
            AccountMappingStatus::NotMapped,
        )
    }

    /// Account mapped onto a branch chart, balances split on period movements.
    pub fn open_branch_mapped(
        account_name: String,
        identity: AccountIdentity,
        totals: MovementTotals,
        current_balance: Decimal,
    ) -> Self {
        let mut account = Self::build(
            account_name,
            identity,
            CompositionProfile::branch_mapped(),
            AccountMappingStatus::Mapped,
        );
        account.apply_balances(totals, current_balance, BalancePolicy::BranchMovement);
        account
    }

    /// Account migrated from a legacy system.
    ///
    /// The legacy CU number is kept verbatim and balances are split on the
    /// cumulative beginning plus movement totals.
    pub fn open_migrated(
        account_name: String,
        identity: AccountIdentity,
        external_cu_number: String,
        totals: MovementTotals,
        current_balance: Decimal,
    ) -> Self {
        let mut account = Self::build(
            account_name,
            identity,
            CompositionProfile::migration(external_cu_number),
            AccountMappingStatus::Migrated,
        );
        account.apply_balances(totals, current_balance, BalancePolicy::Cumulative);
        account
    }

    fn build(
        account_name: String,
        identity: AccountIdentity,
        profile: CompositionProfile,
        account_mapping_status: AccountMappingStatus,
    ) -> Self {
        let mut account = Self {
            id: Uuid::new_v4(),
            account_name,
            account_number: identity.account_number,
            account_number_management_position: numbering::format_management_position(
                &identity.management_position,
            ),
            branch_code: identity.branch_code,
            bank_code: identity.bank_code,
            account_number_network: String::new(),
            account_number_reference: String::new(),
            account_number_cu: String::new(),
            account1: String::new(),
            account2: String::new(),
            account3: String::new(),
            account4: String::new(),
            account5: String::new(),
            account6: String::new(),
            beginning_balance: Decimal::ZERO,
            beginning_balance_debit: Decimal::ZERO,
            beginning_balance_credit: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            debit_balance: Decimal::ZERO,
            credit_balance: Decimal::ZERO,
            last_balance: Decimal::ZERO,
            account_mapping_status,
            status: AccountStatus::Active,
            profile,
            created_at: Utc::now(),
        };
        account.recompute_identity();
        account
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Re-derive every composite identifier from the raw identity fields.
    pub fn recompute_identity(&mut self) {
        let fields = compose_account_number_fields(
            &self.account_number,
            &self.account_number_management_position,
            &self.branch_code,
            &self.bank_code,
            &self.profile,
        );

        let [account1, account2, account3, account4, account5, account6] = fields.prefixes;
        self.account_number_network = fields.network;
        self.account_number_reference = fields.reference;
        self.account_number_cu = fields.cu;
        self.account1 = account1;
        self.account2 = account2;
        self.account3 = account3;
        self.account4 = account4;
        self.account5 = account5;
        self.account6 = account6;
    }

    pub fn set_branch_code(&mut self, branch_code: String) {
        self.branch_code = branch_code;
        self.recompute_identity();
    }

    pub fn set_bank_code(&mut self, bank_code: String) {
        self.bank_code = bank_code;
        self.recompute_identity();
    }

    pub fn set_management_position(&mut self, management_position: &str) {
        self.account_number_management_position =
            numbering::format_management_position(management_position);
        self.recompute_identity();
    }

    // =========================================================================
    // Balances
    // =========================================================================

    /// Record the accumulated figures and split the current balance under `policy`.
    ///
    /// `last_balance` is reset on every recomputation.
    pub fn apply_balances(
        &mut self,
        totals: MovementTotals,
        current_balance: Decimal,
        policy: BalancePolicy,
    ) {
        let assigned = assign_balance(&totals, current_balance, policy);

        self.beginning_balance_debit = totals.beginning_debit;
        self.beginning_balance_credit = totals.beginning_credit;
        self.current_balance = current_balance;
        self.debit_balance = assigned.debit_balance;
        self.credit_balance = assigned.credit_balance;
        self.beginning_balance = assigned.beginning_balance;
        self.last_balance = Decimal::ZERO;
    }

    /// Net balance derived from the account class.
    pub fn determine_balance(&self) -> Decimal {
        determine_balance(&self.account_number, &self.balance_snapshot())
    }

    pub fn balance_snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot {
            beginning_balance_debit: self.beginning_balance_debit,
            beginning_balance_credit: self.beginning_balance_credit,
            current_balance: self.current_balance,
            debit_balance: self.debit_balance,
            credit_balance: self.credit_balance,
        }
    }

    /// Normal balance side of the account's two-digit class.
    pub fn balance_nature(&self) -> BalanceNature {
        account_class(&self.account_number)
            .map(classify_balance_nature)
            .unwrap_or(BalanceNature::Unknown)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn management_position(&self) -> &str {
        &self.account_number_management_position
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    pub fn account_number_network(&self) -> &str {
        &self.account_number_network
    }

    pub fn account_number_reference(&self) -> &str {
        &self.account_number_reference
    }

    pub fn account_number_cu(&self) -> &str {
        &self.account_number_cu
    }

    /// Prefixes `account1` .. `account6`, shortest first
    pub fn prefixes(&self) -> [&str; 6] {
        [
            self.account1.as_str(),
            self.account2.as_str(),
            self.account3.as_str(),
            self.account4.as_str(),
            self.account5.as_str(),
            self.account6.as_str(),
        ]
    }

    pub fn beginning_balance(&self) -> Decimal {
        self.beginning_balance
    }

    pub fn beginning_balance_debit(&self) -> Decimal {
        self.beginning_balance_debit
    }

    pub fn beginning_balance_credit(&self) -> Decimal {
        self.beginning_balance_credit
    }

    pub fn current_balance(&self) -> Decimal {
        self.current_balance
    }

    pub fn debit_balance(&self) -> Decimal {
        self.debit_balance
    }

    pub fn credit_balance(&self) -> Decimal {
        self.credit_balance
    }

    pub fn last_balance(&self) -> Decimal {
        self.last_balance
    }

    pub fn mapping_status(&self) -> AccountMappingStatus {
        self.account_mapping_status
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn profile(&self) -> &CompositionProfile {
        &self.profile
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn identity(number: &str) -> AccountIdentity {
        AccountIdentity::new(number, "1", "002", "010")
    }

    #[test]
    fn test_open_ordinary() {
        let account = Account::open_ordinary("Member savings".to_string(), identity("371200"));

        assert_eq!(account.account_number(), "371200");
        assert_eq!(account.management_position(), "100");
        assert_eq!(account.account_number_network(), "371200100002010");
        assert_eq!(account.account_number_reference(), "371200100002");
        assert_eq!(account.account_number_cu(), "371200100002");
        assert_eq!(account.prefixes(), ["3", "37", "371", "3712", "37120", "371200"]);
        assert_eq!(account.status(), AccountStatus::Active);
        assert_eq!(account.mapping_status(), AccountMappingStatus::NotMapped);
        assert_eq!(account.current_balance(), Decimal::ZERO);
        assert_eq!(account.last_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_open_liaison() {
        let account = Account::open_liaison(
            "Liaison branch 7".to_string(),
            AccountIdentity::new("451", "0", "002", "010"),
            "7",
        );

        assert_eq!(account.account_number(), "451700");
        assert_eq!(account.account_number_reference(), "451700000");
        assert_eq!(account.account_number_network(), "451700000002010");
        assert_eq!(account.account_number_cu(), "451700000002");
        assert_eq!(account.balance_nature(), BalanceNature::Credit);
    }

    #[test]
    fn test_open_branch_mapped() {
        let totals = MovementTotals::new(dec!(1000), dec!(300), dec!(50), dec!(0));
        let account = Account::open_branch_mapped(
            "Suppliers".to_string(),
            identity("401000"),
            totals,
            dec!(1050),
        );

        assert_eq!(account.account_number_network(), "401000100002000000000010");
        assert_eq!(account.mapping_status(), AccountMappingStatus::Mapped);
        assert_eq!(account.debit_balance(), dec!(1050));
        assert_eq!(account.credit_balance(), dec!(0));
        assert_eq!(account.beginning_balance(), dec!(1000));
        assert_eq!(account.beginning_balance_debit(), dec!(1000));
        assert_eq!(account.beginning_balance_credit(), dec!(300));
    }

    #[test]
    fn test_open_migrated() {
        let totals = MovementTotals::new(dec!(1000), dec!(0), dec!(0), dec!(200));
        let account = Account::open_migrated(
            "Legacy account".to_string(),
            identity("371200"),
            "CU-000981".to_string(),
            totals,
            dec!(800),
        );

        assert_eq!(account.account_number_cu(), "CU-000981");
        assert_eq!(account.account_number_reference(), "371200100");
        assert_eq!(account.mapping_status(), AccountMappingStatus::Migrated);
        assert_eq!(account.debit_balance(), dec!(800));
        assert_eq!(account.credit_balance(), dec!(0));
        assert_eq!(account.last_balance(), dec!(0));
    }

    #[test]
    fn test_identity_recomputed_on_change() {
        let mut account = Account::open_ordinary("Member".to_string(), identity("371200"));

        account.set_branch_code("9".to_string());
        assert_eq!(account.account_number_network(), "371200100900010");
        assert_eq!(account.account_number_cu(), "371200100900");

        account.set_management_position("25");
        assert_eq!(account.management_position(), "250");
        assert_eq!(account.account_number_reference(), "371200250900");

        account.set_bank_code("3".to_string());
        assert_eq!(account.account_number_network(), "371200250900300");
    }

    #[test]
    fn test_migrated_cu_survives_recompute() {
        let mut account = Account::open_migrated(
            "Legacy".to_string(),
            identity("371200"),
            "CU-1".to_string(),
            MovementTotals::default(),
            Decimal::ZERO,
        );

        account.set_branch_code("5".to_string());
        assert_eq!(account.account_number_cu(), "CU-1");
    }

    #[test]
    fn test_determine_balance_on_account() {
        let totals = MovementTotals::new(dec!(0), dec!(400), dec!(0), dec!(100));
        let account = Account::open_branch_mapped(
            "Savings".to_string(),
            identity("371200"),
            totals,
            dec!(500),
        );

        // Class 3 reads the beginning credit figure
        assert_eq!(account.determine_balance(), dec!(400));
    }

    #[test]
    fn test_status_symbolic_values() {
        assert_eq!(AccountStatus::Active.to_string(), "Active");
        assert_eq!("Blocked".parse::<AccountStatus>().unwrap(), AccountStatus::Blocked);
        assert!("active".parse::<AccountStatus>().is_err());

        assert_eq!(AccountMappingStatus::Mapped.to_string(), "Mapped");
        assert_eq!(
            "NotMapped".parse::<AccountMappingStatus>().unwrap(),
            AccountMappingStatus::NotMapped
        );
        assert_eq!(
            serde_json::to_string(&AccountMappingStatus::Migrated).unwrap(),
            "\"Migrated\""
        );
    }

    #[test]
    fn test_account_serialization() {
        let account = Account::open_ordinary("Member".to_string(), identity("371200"));

        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id(), account.id());
        assert_eq!(deserialized.account_number_network(), account.account_number_network());
        assert_eq!(deserialized.status(), AccountStatus::Active);
    }
}
