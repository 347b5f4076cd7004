//! CSV format handling for account seeds, command scripts, and output
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization
//! - Conversion from CSV records to domain types
//! - Final account-state serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::ledger;
use crate::types::{Account, AccountSeed, Command, Pin};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record for one account seed
///
/// Matches the accounts file format with columns:
/// owner, pin, interest_rate, movements
/// The movements column holds a `;`-separated list of signed amounts.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountCsvRecord {
    pub owner: String,
    pub pin: String,
    pub interest_rate: String,
    pub movements: String,
}

/// CSV record for one script command
///
/// Matches the command file format with columns:
/// command, identifier, pin, amount
/// Fields an operation does not use are left empty: a loan carries only an
/// amount, a login only identifier and pin.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandCsvRecord {
    pub command: String,
    pub identifier: Option<String>,
    pub pin: Option<String>,
    pub amount: Option<String>,
}

/// Convert an AccountCsvRecord to an AccountSeed
///
/// This function:
/// - Requires a non-empty owner name
/// - Parses the PIN and the interest rate (which must be non-negative)
/// - Splits and parses the `;`-separated movement list, requiring at
///   least one movement per account
///
/// # Returns
///
/// Result containing either:
/// - Ok(AccountSeed) - Successfully converted seed
/// - Err(String) - Error message describing the conversion failure
pub fn convert_account_record(record: AccountCsvRecord) -> Result<AccountSeed, String> {
    let owner = record.owner.trim();
    if owner.is_empty() {
        return Err("Account owner must not be empty".to_string());
    }

    let pin: Pin = record
        .pin
        .trim()
        .parse()
        .map_err(|_| format!("Invalid pin '{}' for owner '{}'", record.pin, owner))?;

    let interest_rate = Decimal::from_str(record.interest_rate.trim()).map_err(|_| {
        format!(
            "Invalid interest rate '{}' for owner '{}'",
            record.interest_rate, owner
        )
    })?;
    if interest_rate < Decimal::ZERO {
        return Err(format!(
            "Negative interest rate '{}' for owner '{}'",
            record.interest_rate, owner
        ));
    }

    let movements = record
        .movements
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Decimal::from_str(part)
                .map_err(|_| format!("Invalid movement '{}' for owner '{}'", part, owner))
        })
        .collect::<Result<Vec<Decimal>, String>>()?;

    if movements.is_empty() {
        return Err(format!("Owner '{}' requires at least one movement", owner));
    }

    Ok(AccountSeed {
        owner: owner.to_string(),
        pin,
        interest_rate,
        movements,
    })
}

/// Convert a CommandCsvRecord to a Command
///
/// This function:
/// - Parses the command string into the matching Command variant
/// - Validates that the fields the operation needs are present
/// - Parses PIN and amount values
///
/// # Returns
///
/// Result containing either:
/// - Ok(Command) - Successfully converted command
/// - Err(String) - Error message describing the conversion failure
pub fn convert_command_record(record: CommandCsvRecord) -> Result<Command, String> {
    let command = record.command.to_lowercase();

    match command.as_str() {
        "login" => Ok(Command::Login {
            identifier: require_identifier(&record, "login")?,
            pin: require_pin(&record, "login")?,
        }),
        "transfer" => Ok(Command::Transfer {
            to: require_identifier(&record, "transfer")?,
            amount: require_amount(&record, "transfer")?,
        }),
        "loan" => Ok(Command::RequestLoan {
            amount: require_amount(&record, "loan")?,
        }),
        "close" => Ok(Command::CloseAccount {
            identifier: require_identifier(&record, "close")?,
            pin: require_pin(&record, "close")?,
        }),
        _ => Err(format!("Invalid command '{}'", record.command)),
    }
}

fn require_identifier(record: &CommandCsvRecord, command: &str) -> Result<String, String> {
    match &record.identifier {
        Some(identifier) if !identifier.trim().is_empty() => Ok(identifier.trim().to_string()),
        _ => Err(format!("{} command requires an identifier", command)),
    }
}

fn require_pin(record: &CommandCsvRecord, command: &str) -> Result<Pin, String> {
    match &record.pin {
        Some(pin) if !pin.trim().is_empty() => pin
            .trim()
            .parse()
            .map_err(|_| format!("Invalid pin '{}' in {} command", pin, command)),
        _ => Err(format!("{} command requires a pin", command)),
    }
}

fn require_amount(record: &CommandCsvRecord, command: &str) -> Result<Decimal, String> {
    match &record.amount {
        Some(amount) if !amount.trim().is_empty() => Decimal::from_str(amount.trim())
            .map_err(|_| format!("Invalid amount '{}' in {} command", amount, command)),
        _ => Err(format!("{} command requires an amount", command)),
    }
}

/// Write final account states to CSV format
///
/// Writes accounts with columns: identifier, owner, balance, income,
/// expense, interest. Accounts are sorted by identifier and money columns
/// are formatted with two decimal places for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Slice of account states to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred or an account held no movements
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Write header
    writer
        .write_record(["identifier", "owner", "balance", "income", "expense", "interest"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort accounts by identifier for deterministic output
    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    // Write each account
    for account in sorted_accounts {
        let balance = ledger::balance(&account).map_err(|e| e.to_string())?;
        let summary = ledger::summary(&account);
        writer
            .write_record(&[
                account.identifier.clone(),
                account.owner.clone(),
                format!("{:.2}", balance),
                format!("{:.2}", summary.income),
                format!("{:.2}", summary.expense),
                format!("{:.2}", summary.interest),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
