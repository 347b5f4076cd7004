//! Core business logic module
//!
//! This module contains the core components of the bank ledger:
//! - `registry` - Account ownership and identifier derivation
//! - `ledger` - Balance, summary, and movement-view derivations
//! - `session` - The single authentication slot
//! - `engine` - Command execution and business rules

pub mod engine;
pub mod ledger;
pub mod registry;
pub mod session;

pub use engine::BankEngine;
pub use registry::{derive_identifier, AccountRegistry};
pub use session::Session;
