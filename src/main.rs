//! ohada_accounts - account numbering command line tool
//!
//! Usage:
//! ```bash
//! ohada_accounts classify 451002
//! ohada_accounts compose 371200 1 --branch 7 --extended
//! ohada_accounts iban 371200 --bank 10005
//! ohada_accounts open 371200 1 Member savings --branch 4
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ohada_accounts::domain::{
    account_class, classify_balance_nature, compose_account_number_fields, compute_iban,
    BalanceNature, CompositionProfile, NetworkNumberVariant,
};
use ohada_accounts::handlers::{AccountHandler, OpenAccountCommand};
use ohada_accounts::{AppResult, Config};

/// OHADA account numbering, classification and IBAN tool
#[derive(Parser, Debug)]
#[command(name = "ohada_accounts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Balance nature of the account's two-digit class
    Classify {
        /// Account number (e.g., 451002)
        account_number: String,
    },

    /// Derived identifiers of an account number
    Compose {
        account_number: String,
        /// Management position, padded to 3
        management_position: String,
        /// Branch code (defaults to BRANCH_CODE)
        #[arg(long)]
        branch: Option<String>,
        /// Pad the branch segment of the network number to 12
        #[arg(long)]
        extended: bool,
    },

    /// IBAN of an account number
    Iban {
        account_number: String,
        /// Bank code (defaults to BANK_CODE)
        #[arg(long)]
        bank: Option<String>,
    },

    /// Open an ordinary account
    Open {
        account_number: String,
        management_position: String,
        /// Account name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Branch code (defaults to BRANCH_CODE)
        #[arg(long)]
        branch: Option<String>,
    },
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout stays machine-readable. `LOG_FORMAT=json`
/// switches to structured output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ohada_accounts=info".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Classify { account_number } => classify(&account_number),
        Commands::Compose {
            account_number,
            management_position,
            branch,
            extended,
        } => {
            let config = Config::from_env()?;
            let network = if extended {
                NetworkNumberVariant::Extended
            } else {
                config.network_variant
            };
            let profile = CompositionProfile {
                network,
                ..CompositionProfile::ordinary()
            };

            let fields = compose_account_number_fields(
                &account_number,
                &management_position,
                branch.as_deref().unwrap_or(&config.branch_code),
                &config.bank_code,
                &profile,
            );
            serde_json::to_value(fields)?
        }
        Commands::Iban {
            account_number,
            bank,
        } => {
            let config = Config::from_env()?;
            let bank_code = bank.as_deref().unwrap_or(&config.bank_code);
            let iban = compute_iban(&config.iban_country_code, bank_code, &account_number)?;
            json!({ "iban": iban })
        }
        Commands::Open {
            account_number,
            management_position,
            name,
            branch,
        } => {
            let config = Config::from_env()?;
            let handler = AccountHandler::from_config(&config);

            let mut command =
                OpenAccountCommand::new(name.join(" "), account_number, management_position);
            if let Some(branch) = branch {
                command = command.with_branch_code(branch);
            }
            open_account(&handler, command)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn classify(account_number: &str) -> serde_json::Value {
    let class = account_class(account_number);
    let nature = class
        .map(classify_balance_nature)
        .unwrap_or(BalanceNature::Unknown);

    tracing::debug!(account_number, ?class, %nature, "Account classified");
    json!({ "account_class": class, "balance_nature": nature })
}

/// Open the account; an IBAN rejection is reported next to it rather than
/// failing the whole command.
fn open_account(
    handler: &AccountHandler,
    command: OpenAccountCommand,
) -> AppResult<serde_json::Value> {
    let account = handler.open_account(command)?;

    let output = match handler.iban_for(&account) {
        Ok(iban) => json!({ "account": account, "iban": iban }),
        Err(e) => {
            tracing::warn!(
                account_id = %account.id(),
                account_number = %account.account_number(),
                error = %e,
                "IBAN could not be computed"
            );
            json!({ "account": account, "iban": null, "iban_error": e.to_string() })
        }
    };
    Ok(output)
}
