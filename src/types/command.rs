//! Command types for the bank ledger engine
//!
//! This module defines the operations a caller can request against the
//! engine, as decoded from the command script.

use super::account::Pin;
use rust_decimal::Decimal;

/// Operations accepted by the transaction engine
///
/// Each variant carries exactly the parameters its operation needs.
/// Transfers and loans act on the currently authenticated account; login
/// and closure name an account explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Authenticate as the named account
    ///
    /// Succeeds iff the identifier resolves and the PIN matches exactly.
    /// On success the account becomes the active session; on failure any
    /// prior session is left untouched.
    Login {
        /// Identifier of the account to authenticate as
        identifier: String,
        /// Supplied PIN credential
        pin: Pin,
    },

    /// Move funds from the active account to another account
    ///
    /// Appends a withdrawal to the sender and a matching deposit to the
    /// recipient, or neither if any precondition fails.
    Transfer {
        /// Identifier of the receiving account
        to: String,
        /// Amount to transfer (must be positive)
        amount: Decimal,
    },

    /// Request a loan disbursement into the active account
    ///
    /// Granted only when some prior movement is at least a tenth of the
    /// requested amount.
    RequestLoan {
        /// Requested loan amount (must be positive)
        amount: Decimal,
    },

    /// Close the active account
    ///
    /// Requires re-confirming the active account's identifier and PIN.
    /// Removes the account from the registry and clears the session.
    CloseAccount {
        /// Confirmation identifier, must match the active session
        identifier: String,
        /// Confirmation PIN, must match the account's PIN
        pin: Pin,
    },
}
