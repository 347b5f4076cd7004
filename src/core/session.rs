//! Session management
//!
//! This module provides the `Session` struct holding the single
//! authentication slot. At most one account is authenticated at a time;
//! a successful login overwrites any previous session, and closing the
//! active account clears it.
//!
//! The session stores the account identifier, not the account itself:
//! the registry stays the exclusive owner of all account records.

use crate::core::registry::AccountRegistry;
use crate::types::{Account, BankError, Pin};

/// The single currently-authenticated account context
#[derive(Debug, Default)]
pub struct Session {
    /// Identifier of the authenticated account, if any
    current: Option<String>,
}

impl Session {
    /// Create a session with no authenticated account
    pub fn new() -> Self {
        Session { current: None }
    }

    /// Authenticate against the registry
    ///
    /// Succeeds iff the identifier resolves to an account whose PIN equals
    /// the supplied value exactly. On success the session is set to that
    /// account; on failure (unknown identifier or wrong PIN) any prior
    /// session is left untouched.
    ///
    /// # Arguments
    ///
    /// * `registry` - The account registry to authenticate against
    /// * `identifier` - The identifier to authenticate as
    /// * `pin` - The supplied PIN credential
    ///
    /// # Returns
    ///
    /// * `Ok(&Account)` - The newly authenticated account
    /// * `Err(BankError::AuthFailure)` - If the credentials do not match
    pub fn login<'a>(
        &mut self,
        registry: &'a AccountRegistry,
        identifier: &str,
        pin: Pin,
    ) -> Result<&'a Account, BankError> {
        let account = registry
            .lookup(identifier)
            .filter(|account| account.pin == pin)
            .ok_or_else(|| BankError::auth_failure(identifier))?;

        self.current = Some(account.identifier.clone());
        Ok(account)
    }

    /// Identifier of the active session's account, or None
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Drop the current session
    ///
    /// Called by the transaction engine when the active account is closed.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
