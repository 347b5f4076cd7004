//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory ledger for a small set of named
//! accounts, replaying banking command scripts against it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Command, BankError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Account ownership and identifier derivation
//!   - [`core::ledger`] - Balance, summary, and movement-view derivations
//!   - [`core::session`] - The single authentication slot
//!   - [`core::engine`] - Command execution and business rules
//! - [`io`] - CSV format handling and file readers
//! - [`pipeline`] - The read-replay-write orchestration
//!
//! # Commands
//!
//! The engine supports four commands:
//!
//! - **Login**: Authenticate as an account by identifier and PIN
//! - **Transfer**: Move funds from the active account to another account
//! - **Loan**: Disburse a loan when a prior movement covers a tenth of it
//! - **Close**: Remove the active account after credential re-confirmation
//!
//! # Ledger Model
//!
//! Each account holds an append-only list of signed movements (positive =
//! deposit, negative = withdrawal). Balance, income, expense, and accrued
//! interest are always derived from that list, never stored separately,
//! and the sortable display view never reorders the underlying movements.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{derive_identifier, AccountRegistry, BankEngine, Session};
pub use io::write_accounts_csv;
pub use types::{Account, AccountSeed, AccountSummary, BankError, Command, MovementView, Pin};
