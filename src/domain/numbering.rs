//! Account numbering
//!
//! Derives the fixed-width composite identifiers of an account from its raw
//! number, management position, branch code and bank code.
//!
//! Padding never truncates: a field already longer than its nominal width is
//! kept whole, so composite numbers are only fixed-width for well-formed
//! inputs. Nothing here validates length or charset.

use serde::{Deserialize, Serialize};

/// Fill character for every padded segment
pub const PAD_CHAR: char = '0';

/// Width of the account number segment
pub const ACCOUNT_NUMBER_WIDTH: usize = 6;

/// Width of the management position segment
pub const MANAGEMENT_POSITION_WIDTH: usize = 3;

/// Width of a branch or bank code segment
pub const CODE_WIDTH: usize = 3;

/// Width of the branch segment in extended network numbers
pub const EXTENDED_BRANCH_WIDTH: usize = 12;

/// Number of progressive prefixes (`account1` .. `account6`)
pub const PREFIX_COUNT: usize = 6;

/// Branch segment width used when building the network number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NetworkNumberVariant {
    /// Branch code padded to 3
    #[default]
    Standard,
    /// Branch code padded to 12
    Extended,
}

impl NetworkNumberVariant {
    pub fn branch_width(&self) -> usize {
        match self {
            NetworkNumberVariant::Standard => CODE_WIDTH,
            NetworkNumberVariant::Extended => EXTENDED_BRANCH_WIDTH,
        }
    }
}

/// Whether the reference number carries the branch segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceNumberVariant {
    #[default]
    WithBranch,
    WithoutBranch,
}

/// Where the CU number comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CuNumberSource {
    /// Built from account number, management position and branch code
    #[default]
    Computed,
    /// Carried over verbatim from the source system
    External(String),
}

/// The per-scenario choices applied when composing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositionProfile {
    pub network: NetworkNumberVariant,
    pub reference: ReferenceNumberVariant,
    pub cu: CuNumberSource,
}

impl CompositionProfile {
    /// Ordinary member or ledger account
    pub fn ordinary() -> Self {
        Self {
            network: NetworkNumberVariant::Standard,
            reference: ReferenceNumberVariant::WithBranch,
            cu: CuNumberSource::Computed,
        }
    }

    /// Inter-branch liaison (class 45) account
    pub fn liaison() -> Self {
        Self {
            network: NetworkNumberVariant::Standard,
            reference: ReferenceNumberVariant::WithoutBranch,
            cu: CuNumberSource::Computed,
        }
    }

    /// Account mapped onto a branch chart of accounts
    pub fn branch_mapped() -> Self {
        Self {
            network: NetworkNumberVariant::Extended,
            reference: ReferenceNumberVariant::WithBranch,
            cu: CuNumberSource::Computed,
        }
    }

    /// Account migrated from a legacy system, keeping its CU number
    pub fn migration(external_cu: impl Into<String>) -> Self {
        Self {
            network: NetworkNumberVariant::Standard,
            reference: ReferenceNumberVariant::WithoutBranch,
            cu: CuNumberSource::External(external_cu.into()),
        }
    }
}

/// Every derived identifier of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumberFields {
    pub network: String,
    pub reference: String,
    pub cu: String,
    /// `prefixes[i]` is the prefix of length `i + 1`
    pub prefixes: [String; PREFIX_COUNT],
}

/// First `n` characters of `account_number`, or all of it when shorter.
pub fn prefix(account_number: &str, n: usize) -> String {
    account_number.chars().take(n).collect()
}

/// [`prefix`] over a possibly missing account number.
pub fn prefix_opt(account_number: Option<&str>, n: usize) -> String {
    account_number.map(|a| prefix(a, n)).unwrap_or_default()
}

/// Right-pad `value` with `'0'` up to `width` characters.
pub fn pad_right(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let mut padded = String::with_capacity(value.len() + (width - len));
    padded.push_str(value);
    padded.extend(std::iter::repeat(PAD_CHAR).take(width - len));
    padded
}

/// Management positions are always rendered on 3 characters.
pub fn format_management_position(management_position: &str) -> String {
    pad_right(management_position, MANAGEMENT_POSITION_WIDTH)
}

/// `account(6) + position(3) + branch(3 or 12) + bank(3)`
pub fn build_network_number(
    account_number: &str,
    management_position: &str,
    branch_code: &str,
    bank_code: &str,
    variant: NetworkNumberVariant,
) -> String {
    let mut network = account_segment(account_number, management_position);
    network.push_str(&pad_right(branch_code, variant.branch_width()));
    network.push_str(&pad_right(bank_code, CODE_WIDTH));
    network
}

/// `account(6) + position(3) [+ branch(3)]`
pub fn build_reference_number(
    account_number: &str,
    management_position: &str,
    branch_code: &str,
    variant: ReferenceNumberVariant,
) -> String {
    let mut reference = account_segment(account_number, management_position);
    if variant == ReferenceNumberVariant::WithBranch {
        reference.push_str(&pad_right(branch_code, CODE_WIDTH));
    }
    reference
}

/// External CU numbers pass through untouched; otherwise
/// `account(6) + position(3) + branch(3)`.
pub fn build_cu_number(
    account_number: &str,
    management_position: &str,
    branch_code: &str,
    source: &CuNumberSource,
) -> String {
    match source {
        CuNumberSource::External(value) => value.clone(),
        CuNumberSource::Computed => {
            let mut cu = account_segment(account_number, management_position);
            cu.push_str(&pad_right(branch_code, CODE_WIDTH));
            cu
        }
    }
}

/// Liaison account for a counterpart branch: `chart account + branch(3)`.
pub fn build_liaison_number(chart_account: &str, counterpart_branch_code: &str) -> String {
    let mut liaison = chart_account.to_string();
    liaison.push_str(&pad_right(counterpart_branch_code, CODE_WIDTH));
    liaison
}

/// Compose all derived identifiers of an account under `profile`.
pub fn compose_account_number_fields(
    account_number: &str,
    management_position: &str,
    branch_code: &str,
    bank_code: &str,
    profile: &CompositionProfile,
) -> AccountNumberFields {
    AccountNumberFields {
        network: build_network_number(
            account_number,
            management_position,
            branch_code,
            bank_code,
            profile.network,
        ),
        reference: build_reference_number(
            account_number,
            management_position,
            branch_code,
            profile.reference,
        ),
        cu: build_cu_number(account_number, management_position, branch_code, &profile.cu),
        prefixes: std::array::from_fn(|i| prefix(account_number, i + 1)),
    }
}

fn account_segment(account_number: &str, management_position: &str) -> String {
    let mut segment = pad_right(account_number, ACCOUNT_NUMBER_WIDTH);
    segment.push_str(&format_management_position(management_position));
    segment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_scenarios() {
        assert_eq!(prefix("123456", 6), "123456");
        assert_eq!(prefix("12", 6), "12");
        assert_eq!(prefix("", 3), "");
        assert_eq!(prefix("37120001", 4), "3712");
        assert_eq!(prefix_opt(None, 3), "");
        assert_eq!(prefix_opt(Some("371"), 2), "37");
    }

    #[test]
    fn test_prefix_length_is_min_of_n_and_len() {
        let number = "4510021";
        for n in 0..10 {
            let p = prefix(number, n);
            assert_eq!(p.len(), n.min(number.len()));
            assert!(number.starts_with(&p));
        }
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("12", 6), "120000");
        assert_eq!(pad_right("", 3), "000");
        assert_eq!(pad_right("1234567", 6), "1234567");
        assert_eq!(pad_right("001", 3), "001");
    }

    #[test]
    fn test_pad_right_never_truncates() {
        for value in ["", "1", "12345", "123456789012345"] {
            for width in [0, 3, 6, 12] {
                let padded = pad_right(value, width);
                assert_eq!(padded.len(), value.len().max(width));
                assert!(padded.starts_with(value));
            }
        }
    }

    #[test]
    fn test_network_number_standard() {
        let network =
            build_network_number("371", "1", "2", "10", NetworkNumberVariant::Standard);
        assert_eq!(network, "371000100200100");
        assert_eq!(network.len(), 15);
    }

    #[test]
    fn test_network_number_extended() {
        let network =
            build_network_number("371", "1", "2", "10", NetworkNumberVariant::Extended);
        assert_eq!(network, "371000100200000000000100");
        assert_eq!(network.len(), 24);
    }

    #[test]
    fn test_network_number_keeps_oversized_fields() {
        let network = build_network_number(
            "37100012",
            "12",
            "0001",
            "1",
            NetworkNumberVariant::Standard,
        );
        assert_eq!(network, "371000121200001100");
    }

    #[test]
    fn test_reference_number_variants() {
        assert_eq!(
            build_reference_number("3712", "5", "7", ReferenceNumberVariant::WithBranch),
            "371200500700"
        );
        assert_eq!(
            build_reference_number("3712", "5", "7", ReferenceNumberVariant::WithoutBranch),
            "371200500"
        );
    }

    #[test]
    fn test_cu_number_sources() {
        assert_eq!(
            build_cu_number("3712", "5", "7", &CuNumberSource::Computed),
            "371200500700"
        );
        assert_eq!(
            build_cu_number("3712", "5", "7", &CuNumberSource::External("LEGACY-42".into())),
            "LEGACY-42"
        );
    }

    #[test]
    fn test_liaison_number() {
        assert_eq!(build_liaison_number("451", "2"), "451200");
        assert_eq!(build_liaison_number("451", "002"), "451002");
    }

    #[test]
    fn test_compose_fields() {
        let fields =
            compose_account_number_fields("451002", "1", "001", "010", &CompositionProfile::ordinary());

        assert_eq!(fields.network, "451002100001010");
        assert_eq!(fields.reference, "451002100001");
        assert_eq!(fields.cu, "451002100001");
        assert_eq!(
            fields.prefixes,
            ["4", "45", "451", "4510", "45100", "451002"].map(String::from)
        );
    }

    #[test]
    fn test_compose_short_number_prefixes() {
        let fields = compose_account_number_fields("57", "", "", "", &CompositionProfile::liaison());

        assert_eq!(fields.prefixes[0], "5");
        assert_eq!(fields.prefixes[1], "57");
        assert_eq!(fields.prefixes[5], "57");
        assert_eq!(fields.reference, "570000000");
    }
}
