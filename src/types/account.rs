//! Account-related types for the bank ledger engine
//!
//! This module defines the Account structure and the derived display data
//! produced from an account's movement history.

use rust_decimal::Decimal;

/// Account PIN credential
///
/// A toy credential compared with strict equality; no hashing or
/// normalization is applied.
pub type Pin = u32;

/// Raw account data before registration
///
/// Seeds carry everything an account needs except its identifier, which
/// the registry derives from the owner name at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSeed {
    /// Display name of the account holder (non-empty)
    pub owner: String,

    /// PIN credential
    pub pin: Pin,

    /// Interest rate as a percentage (e.g. 1.2 means 1.2%)
    pub interest_rate: Decimal,

    /// Initial signed movements; every seed carries at least one
    pub movements: Vec<Decimal>,
}

/// A registered account
///
/// Owned exclusively by the registry. The identifier is derived once at
/// registration and never changes; movements are append-only after seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Lowercase initials of the owner name, unique within the registry
    pub identifier: String,

    /// Display name of the account holder
    pub owner: String,

    /// PIN credential
    pub pin: Pin,

    /// Interest rate as a percentage
    pub interest_rate: Decimal,

    /// Ordered signed movements: positive = deposit, negative = withdrawal
    pub movements: Vec<Decimal>,
}

/// Derived income/expense/interest figures for one account
///
/// Computed on demand from the movement list; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSummary {
    /// Sum of positive movements (zero if there are none)
    pub income: Decimal,

    /// Absolute value of the sum of negative movements (zero if none)
    pub expense: Decimal,

    /// Accrued interest on deposits, per-movement terms below 1 discarded
    pub interest: Decimal,
}

/// One movement as presented to a display layer
///
/// The index is the 1-based position in original recording order and is
/// preserved even when the view is sorted by amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementView {
    /// 1-based position in original recording order
    pub index: usize,

    /// Signed movement amount
    pub amount: Decimal,
}
