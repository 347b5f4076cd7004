//! Bank Ledger CLI
//!
//! Command-line interface for replaying banking command scripts against an
//! in-memory ledger seeded from an accounts CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv commands.csv > final_accounts.csv
//! ```
//!
//! The program registers the seed accounts, executes the script commands in
//! order, and writes the final state of every surviving account to stdout.
//! Declined commands are reported on stderr and do not stop the run.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed seeds, etc.)

use rust_bank_ledger::cli;
use rust_bank_ledger::pipeline;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Replay the script; final account states go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run(&args.accounts_file, &args.commands_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
