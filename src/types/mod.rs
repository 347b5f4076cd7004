//! Core data types for the bank ledger engine
//!
//! This module contains all the fundamental types used throughout the system:
//! - `account` - Account state and derived display data
//! - `command` - Operations a caller can request
//! - `error` - Error taxonomy for declined commands and failures

pub mod account;
pub mod command;
pub mod error;

pub use account::{Account, AccountSeed, AccountSummary, MovementView, Pin};
pub use command::Command;
pub use error::BankError;
