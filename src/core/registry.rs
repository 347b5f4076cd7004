//! Account registry
//!
//! This module provides the `AccountRegistry` struct which exclusively owns
//! all account records and provides identifier-based access to them.
//!
//! The registry is responsible for:
//! - Deriving a unique short identifier for each account at registration
//! - Looking accounts up by identifier
//! - Removing closed accounts
//! - Providing sorted account listings for output

use crate::types::{Account, AccountSeed, BankError};
use std::collections::HashMap;

/// Derive an account identifier from an owner display name
///
/// The identifier is the lowercase first character of each
/// whitespace-separated token of the owner name, concatenated in order.
/// "Jonas Schmedtmann" becomes "js", "Steven Thomas Williams" becomes "stw".
///
/// # Arguments
///
/// * `owner` - The account owner's display name
///
/// # Returns
///
/// The derived identifier (empty only for an owner with no tokens)
pub fn derive_identifier(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Owns all live accounts, keyed by derived identifier
///
/// The registry maintains an in-memory map of identifiers to accounts.
/// All other components reach accounts through it; nothing operates on
/// detached copies.
pub struct AccountRegistry {
    /// Map of derived identifiers to account records
    accounts: HashMap<String, Account>,
}

impl AccountRegistry {
    /// Create a new registry with no accounts
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
        }
    }

    /// Register a batch of account seeds
    ///
    /// Derives each account's identifier from its owner name and inserts
    /// the account. Identifiers must be unique across all live accounts;
    /// registration fails fast on the first collision.
    ///
    /// # Arguments
    ///
    /// * `seeds` - The account seeds to register
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every seed registered successfully
    /// * `Err(BankError::DuplicateIdentifier)` if two owners collapse to
    ///   the same initials
    pub fn register(&mut self, seeds: Vec<AccountSeed>) -> Result<(), BankError> {
        for seed in seeds {
            let identifier = derive_identifier(&seed.owner);
            if self.accounts.contains_key(&identifier) {
                return Err(BankError::duplicate_identifier(&identifier, &seed.owner));
            }
            self.accounts.insert(
                identifier.clone(),
                Account {
                    identifier,
                    owner: seed.owner,
                    pin: seed.pin,
                    interest_rate: seed.interest_rate,
                    movements: seed.movements,
                },
            );
        }
        Ok(())
    }

    /// Look up an account by identifier
    pub fn lookup(&self, identifier: &str) -> Option<&Account> {
        self.accounts.get(identifier)
    }

    /// Look up an account by identifier for mutation
    pub fn lookup_mut(&mut self, identifier: &str) -> Option<&mut Account> {
        self.accounts.get_mut(identifier)
    }

    /// Check whether an identifier resolves to a live account
    pub fn contains(&self, identifier: &str) -> bool {
        self.accounts.contains_key(identifier)
    }

    /// Remove an account from the registry
    ///
    /// Callers must have validated existence first: removing an absent
    /// account is a logic error, not an idempotent no-op.
    ///
    /// # Arguments
    ///
    /// * `identifier` - The identifier of the account to remove
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The removed account
    /// * `Err(BankError::AccountNotFound)` - If the identifier does not resolve
    pub fn remove(&mut self, identifier: &str) -> Result<Account, BankError> {
        self.accounts
            .remove(identifier)
            .ok_or_else(|| BankError::account_not_found(identifier))
    }

    /// Get all accounts sorted by identifier
    ///
    /// Sorting gives deterministic output for CSV generation.
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.identifier.clone());
        accounts
    }

    /// Number of live accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn seed(owner: &str, pin: u32) -> AccountSeed {
        AccountSeed {
            owner: owner.to_string(),
            pin,
            interest_rate: Decimal::ONE,
            movements: vec![Decimal::new(100, 0)],
        }
    }

    #[rstest]
    #[case::two_tokens("Jonas Schmedtmann", "js")]
    #[case::three_tokens("Steven Thomas Williams", "stw")]
    #[case::single_token("Sarah", "s")]
    #[case::already_lowercase("jessica davis", "jd")]
    #[case::extra_whitespace("  Jonas   Schmedtmann  ", "js")]
    #[case::empty_owner("", "")]
    fn test_derive_identifier(#[case] owner: &str, #[case] expected: &str) {
        assert_eq!(derive_identifier(owner), expected);
    }

    #[test]
    fn test_register_assigns_identifiers() {
        let mut registry = AccountRegistry::new();
        registry
            .register(vec![seed("Jonas Schmedtmann", 1111), seed("Jessica Davis", 2222)])
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("js").unwrap().owner, "Jonas Schmedtmann");
        assert_eq!(registry.lookup("jd").unwrap().owner, "Jessica Davis");
    }

    #[test]
    fn test_register_rejects_duplicate_identifier() {
        let mut registry = AccountRegistry::new();

        let result =
            registry.register(vec![seed("Jonas Schmedtmann", 1111), seed("Jane Smith", 2222)]);

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            BankError::DuplicateIdentifier { .. }
        ));
    }

    #[test]
    fn test_lookup_unknown_identifier_returns_none() {
        let registry = AccountRegistry::new();
        assert!(registry.lookup("zz").is_none());
    }

    #[test]
    fn test_remove_existing_account() {
        let mut registry = AccountRegistry::new();
        registry.register(vec![seed("Jonas Schmedtmann", 1111)]).unwrap();

        let removed = registry.remove("js").unwrap();
        assert_eq!(removed.owner, "Jonas Schmedtmann");
        assert!(registry.lookup("js").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_absent_account_is_an_error() {
        let mut registry = AccountRegistry::new();

        let result = registry.remove("zz");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            BankError::AccountNotFound { .. }
        ));
    }

    #[test]
    fn test_all_accounts_sorted_by_identifier() {
        let mut registry = AccountRegistry::new();
        registry
            .register(vec![
                seed("Steven Thomas Williams", 3333),
                seed("Jonas Schmedtmann", 1111),
                seed("Jessica Davis", 2222),
            ])
            .unwrap();

        let identifiers: Vec<&str> = registry
            .all_accounts()
            .iter()
            .map(|account| account.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["jd", "js", "stw"]);
    }

    #[test]
    fn test_lookup_mut_allows_appending_movements() {
        let mut registry = AccountRegistry::new();
        registry.register(vec![seed("Jonas Schmedtmann", 1111)]).unwrap();

        registry
            .lookup_mut("js")
            .unwrap()
            .movements
            .push(Decimal::new(-40, 0));

        assert_eq!(registry.lookup("js").unwrap().movements.len(), 2);
    }
}
