//! Error types for the bank ledger engine
//!
//! This module defines all error types that can occur while replaying a
//! command script. Errors are designed to be descriptive and user-friendly
//! for CLI output.
//!
//! # Error Categories
//!
//! - **Declined commands**: authentication failures, invalid amounts,
//!   insufficient funds, ineligible loans, etc. These are recoverable:
//!   the command has no effect and processing continues.
//! - **Invariant violations**: missing accounts, duplicate identifiers,
//!   empty ledgers. These indicate a programming or configuration error
//!   and abort processing.
//! - **File I/O and CSV parsing errors**: ambient failures from the file
//!   front end.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger engine
///
/// Each variant includes the context needed to diagnose the rejection
/// or failure. Declined commands never leave partial effects behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Login or closure confirmation failed
    ///
    /// The identifier did not resolve to an account, or the supplied PIN
    /// did not match. Recoverable; any prior session is left untouched.
    #[error("Authentication failed for '{identifier}'")]
    AuthFailure {
        /// The identifier the caller attempted to authenticate as
        identifier: String,
    },

    /// An operation requiring a session was attempted with none active
    ///
    /// Recoverable. Also raised after the active account was closed.
    #[error("No account is logged in")]
    NotLoggedIn,

    /// A non-positive amount was supplied to a transfer or loan
    ///
    /// Recoverable; the command is declined with no movement recorded.
    #[error("Invalid amount {amount}: must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Transfer amount exceeds the sender's balance
    ///
    /// Recoverable; neither account's movements change.
    #[error("Insufficient funds for '{identifier}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Identifier of the sending account
        identifier: String,
        /// The sender's balance at decision time
        balance: Decimal,
        /// The requested transfer amount
        requested: Decimal,
    },

    /// Transfer target identifier does not resolve to an account
    ///
    /// Recoverable; the transfer is declined.
    #[error("Unknown recipient '{identifier}'")]
    UnknownRecipient {
        /// The unresolved recipient identifier
        identifier: String,
    },

    /// Sender and recipient identifiers are identical
    ///
    /// Recoverable; self-transfers are forbidden.
    #[error("Cannot transfer from '{identifier}' to itself")]
    SelfTransfer {
        /// The identifier used on both sides
        identifier: String,
    },

    /// No prior movement qualifies as collateral for the requested loan
    ///
    /// A loan requires some existing movement of at least a tenth of the
    /// requested amount. Recoverable; no disbursement is recorded.
    #[error("Loan of {requested} declined: no qualifying prior deposit")]
    LoanIneligible {
        /// The requested loan amount
        requested: Decimal,
    },

    /// An identifier expected to resolve did not
    ///
    /// Registry invariant violation; callers validate existence before
    /// removal or mutation. Fatal.
    #[error("Account '{identifier}' not found")]
    AccountNotFound {
        /// The identifier that failed to resolve
        identifier: String,
    },

    /// Two distinct owners collapsed to the same derived identifier
    ///
    /// Registration fails fast rather than registering an unreachable
    /// account. Fatal configuration error.
    #[error("Duplicate identifier '{identifier}' derived for owner '{owner}'")]
    DuplicateIdentifier {
        /// The colliding identifier
        identifier: String,
        /// Owner of the seed that collided
        owner: String,
    },

    /// Balance was requested for an account with no movements
    ///
    /// Every account is seeded with at least one movement, so this state
    /// is unreachable through normal operation. Fatal.
    #[error("Account '{identifier}' has no recorded movements")]
    EmptyLedger {
        /// Identifier of the empty account
        identifier: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// Typically fatal (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable in the command stream (the row is skipped), fatal in
    /// the accounts seed file.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Whether this error is a declined command rather than a failure
    ///
    /// Recoverable errors are reported and processing continues with the
    /// next command; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BankError::AuthFailure { .. }
                | BankError::NotLoggedIn
                | BankError::InvalidAmount { .. }
                | BankError::InsufficientFunds { .. }
                | BankError::UnknownRecipient { .. }
                | BankError::SelfTransfer { .. }
                | BankError::LoanIneligible { .. }
        )
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AuthFailure error
    pub fn auth_failure(identifier: &str) -> Self {
        BankError::AuthFailure {
            identifier: identifier.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(identifier: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            identifier: identifier.to_string(),
            balance,
            requested,
        }
    }

    /// Create an UnknownRecipient error
    pub fn unknown_recipient(identifier: &str) -> Self {
        BankError::UnknownRecipient {
            identifier: identifier.to_string(),
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(identifier: &str) -> Self {
        BankError::SelfTransfer {
            identifier: identifier.to_string(),
        }
    }

    /// Create a LoanIneligible error
    pub fn loan_ineligible(requested: Decimal) -> Self {
        BankError::LoanIneligible { requested }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(identifier: &str) -> Self {
        BankError::AccountNotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Create a DuplicateIdentifier error
    pub fn duplicate_identifier(identifier: &str, owner: &str) -> Self {
        BankError::DuplicateIdentifier {
            identifier: identifier.to_string(),
            owner: owner.to_string(),
        }
    }

    /// Create an EmptyLedger error
    pub fn empty_ledger(identifier: &str) -> Self {
        BankError::EmptyLedger {
            identifier: identifier.to_string(),
        }
    }
}
