//! Command script pipeline
//!
//! Orchestrates the full run: load the account seeds, replay the command
//! script through the engine, and write the final account states as CSV.
//!
//! # Error Handling
//!
//! Fatal errors (missing files, malformed seeds, duplicate identifiers,
//! registry invariant violations) are returned immediately. Declined
//! commands and malformed script rows are logged to stderr and processing
//! continues with the next command.

use crate::core::BankEngine;
use crate::io::csv_format::write_accounts_csv;
use crate::io::reader::{read_account_seeds, CommandReader};
use crate::types::Account;
use std::io::Write;
use std::path::Path;

/// Run a command script against a seeded engine and write final accounts
///
/// This function orchestrates the complete pipeline:
/// 1. Loads the account seeds and registers them with the engine
/// 2. Streams commands from the script, executing each in order
/// 3. Writes the surviving account states to output as CSV
///
/// # Arguments
///
/// * `accounts_path` - Path to the accounts seed CSV file
/// * `commands_path` - Path to the command script CSV file
/// * `output` - Mutable reference to a writer for the final account states
///
/// # Returns
///
/// * `Ok(())` if processing completed (possibly with declined commands)
/// * `Err(String)` if a fatal error occurred
pub fn run(
    accounts_path: &Path,
    commands_path: &Path,
    output: &mut dyn Write,
) -> Result<(), String> {
    let seeds = read_account_seeds(accounts_path)?;
    let mut engine = BankEngine::with_accounts(seeds).map_err(|e| e.to_string())?;

    let reader = CommandReader::new(commands_path)?;
    for result in reader {
        match result {
            Ok(command) => {
                if let Err(e) = engine.execute(command) {
                    if e.is_recoverable() {
                        // Declined command; nothing changed, keep going
                        eprintln!("Command declined: {}", e);
                    } else {
                        return Err(e.to_string());
                    }
                }
            }
            Err(e) => {
                // Log script parsing errors to stderr
                eprintln!("CSV parsing error: {}", e);
            }
        }
    }

    let accounts: Vec<Account> = engine.accounts().into_iter().cloned().collect();
    write_accounts_csv(&accounts, output)?;

    Ok(())
}
