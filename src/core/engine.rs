//! Transaction engine
//!
//! This module provides the BankEngine that executes commands against the
//! AccountRegistry and Session components.
//!
//! The engine enforces business rules such as:
//! - Session checks before any account-bound operation
//! - Transfer validation (positive amount, recipient exists, no self
//!   transfer, sufficient balance)
//! - Loan eligibility (a prior movement of at least a tenth of the
//!   requested amount)
//! - Credential re-confirmation before account closure
//!
//! Every operation is a single atomic decision: all preconditions are
//! validated before any movement is appended, so a declined command never
//! leaves a partial effect.

use crate::core::ledger;
use crate::core::registry::AccountRegistry;
use crate::core::session::Session;
use crate::types::{Account, AccountSeed, AccountSummary, BankError, Command, MovementView, Pin};
use rust_decimal::Decimal;

/// Executes commands against the registry and session
///
/// Owns the single shared mutable resource of the system (registry plus
/// session slot); each operation runs to completion before the next is
/// accepted.
pub struct BankEngine {
    registry: AccountRegistry,
    session: Session,
}

impl BankEngine {
    /// Create an engine with an empty registry and no session
    pub fn new() -> Self {
        BankEngine {
            registry: AccountRegistry::new(),
            session: Session::new(),
        }
    }

    /// Create an engine pre-populated with the given account seeds
    ///
    /// # Errors
    ///
    /// Returns `BankError::DuplicateIdentifier` if two owners collapse to
    /// the same derived identifier.
    pub fn with_accounts(seeds: Vec<AccountSeed>) -> Result<Self, BankError> {
        let mut engine = Self::new();
        engine.registry.register(seeds)?;
        Ok(engine)
    }

    /// Execute a single command
    ///
    /// Routes the command to the appropriate handler.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the command was accepted
    /// * `Err(BankError)` with the decline reason or failure otherwise
    pub fn execute(&mut self, command: Command) -> Result<(), BankError> {
        match command {
            Command::Login { identifier, pin } => self.login(&identifier, pin).map(|_| ()),
            Command::Transfer { to, amount } => self.transfer(&to, amount),
            Command::RequestLoan { amount } => self.request_loan(amount),
            Command::CloseAccount { identifier, pin } => self.close_account(&identifier, pin),
        }
    }

    /// Authenticate as the named account
    ///
    /// On success the account becomes the active session and is returned;
    /// on failure any prior session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BankError::AuthFailure` for an unknown identifier or a
    /// wrong PIN.
    pub fn login(&mut self, identifier: &str, pin: Pin) -> Result<&Account, BankError> {
        self.session.login(&self.registry, identifier, pin)
    }

    /// Transfer funds from the active account to another account
    ///
    /// Preconditions, all required: an active session, `amount > 0`, the
    /// recipient resolves, the recipient is not the sender, and the
    /// sender's balance covers the amount. On acceptance a `-amount`
    /// movement is appended to the sender and a `+amount` movement to the
    /// recipient; on decline neither account changes.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn`, `InvalidAmount`, `UnknownRecipient`,
    /// `SelfTransfer`, or `InsufficientFunds` on decline.
    pub fn transfer(&mut self, to: &str, amount: Decimal) -> Result<(), BankError> {
        let from = self
            .session
            .current()
            .ok_or(BankError::NotLoggedIn)?
            .to_string();

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        if !self.registry.contains(to) {
            return Err(BankError::unknown_recipient(to));
        }

        if to == from {
            return Err(BankError::self_transfer(&from));
        }

        let sender = self
            .registry
            .lookup(&from)
            .ok_or_else(|| BankError::account_not_found(&from))?;
        let balance = ledger::balance(sender)?;
        if balance < amount {
            return Err(BankError::insufficient_funds(&from, balance, amount));
        }

        // All preconditions hold; both appends happen together
        let sender = self
            .registry
            .lookup_mut(&from)
            .ok_or_else(|| BankError::account_not_found(&from))?;
        ledger::record_movement(sender, -amount);

        let recipient = self
            .registry
            .lookup_mut(to)
            .ok_or_else(|| BankError::account_not_found(to))?;
        ledger::record_movement(recipient, amount);

        Ok(())
    }

    /// Request a loan disbursement into the active account
    ///
    /// Granted iff `amount > 0` and some existing movement is at least
    /// `amount * 0.1` (a proof of ability to repay). On acceptance a
    /// single `+amount` movement is appended.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn`, `InvalidAmount`, or `LoanIneligible` on
    /// decline.
    pub fn request_loan(&mut self, amount: Decimal) -> Result<(), BankError> {
        let identifier = self
            .session
            .current()
            .ok_or(BankError::NotLoggedIn)?
            .to_string();

        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let account = self
            .registry
            .lookup_mut(&identifier)
            .ok_or_else(|| BankError::account_not_found(&identifier))?;

        let collateral = amount * Decimal::new(1, 1);
        if !account.movements.iter().any(|movement| *movement >= collateral) {
            return Err(BankError::loan_ineligible(amount));
        }

        ledger::record_movement(account, amount);
        Ok(())
    }

    /// Close the active account
    ///
    /// The confirmation identifier must equal the active session's
    /// identifier and the confirmation PIN must match the account's PIN.
    /// On acceptance the account is removed from the registry and the
    /// session is cleared; it is no longer reachable by lookup, transfer,
    /// or login.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` with no session, or `AuthFailure` if the
    /// confirmation credentials do not match; the account and session are
    /// left as they were.
    pub fn close_account(&mut self, identifier: &str, pin: Pin) -> Result<(), BankError> {
        let current = self
            .session
            .current()
            .ok_or(BankError::NotLoggedIn)?
            .to_string();

        let account = self
            .registry
            .lookup(&current)
            .ok_or_else(|| BankError::account_not_found(&current))?;

        if identifier != current || pin != account.pin {
            return Err(BankError::auth_failure(identifier));
        }

        self.registry.remove(&current)?;
        self.session.clear();
        Ok(())
    }

    /// The active session's account
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` with no session.
    pub fn current_account(&self) -> Result<&Account, BankError> {
        let identifier = self.session.current().ok_or(BankError::NotLoggedIn)?;
        self.registry
            .lookup(identifier)
            .ok_or_else(|| BankError::account_not_found(identifier))
    }

    /// Balance of the active account
    pub fn balance(&self) -> Result<Decimal, BankError> {
        ledger::balance(self.current_account()?)
    }

    /// Income, expense, and interest figures for the active account
    pub fn summary(&self) -> Result<AccountSummary, BankError> {
        Ok(ledger::summary(self.current_account()?))
    }

    /// Movement list of the active account, optionally sorted for display
    pub fn movements(&self, sorted: bool) -> Result<Vec<MovementView>, BankError> {
        Ok(ledger::ordered_view(self.current_account()?, sorted))
    }

    /// All live accounts sorted by identifier, for output
    pub fn accounts(&self) -> Vec<&Account> {
        self.registry.all_accounts()
    }
}

impl Default for BankEngine {
    fn default() -> Self {
        Self::new()
    }
}
