//! Ledger derivations over an account's movement history
//!
//! This module computes everything a display layer needs from the raw
//! movement list: balance, income/expense/interest summary, and the
//! optionally sorted movement view. All functions except
//! `record_movement` are pure; none of them mutates or reorders the
//! underlying movements.
//!
//! Sign conventions and amount limits are enforced by the transaction
//! engine, not here.

use crate::types::{Account, AccountSummary, BankError, MovementView};
use rust_decimal::Decimal;

/// Append one signed movement to an account
///
/// The ledger performs no validation; the transaction engine has already
/// decided the movement is legitimate by the time it is recorded.
pub fn record_movement(account: &mut Account, amount: Decimal) {
    account.movements.push(amount);
}

/// Compute an account's balance as the sum of all movements
///
/// # Returns
///
/// * `Ok(Decimal)` - The sum of all movements
/// * `Err(BankError::EmptyLedger)` - If the account has no movements; every
///   account is seeded with at least one, so this indicates an invariant
///   violation
pub fn balance(account: &Account) -> Result<Decimal, BankError> {
    if account.movements.is_empty() {
        return Err(BankError::empty_ledger(&account.identifier));
    }
    Ok(account.movements.iter().copied().sum())
}

/// Compute an account's income, expense, and accrued interest
///
/// Income is the sum of positive movements, expense the absolute value of
/// the sum of negative movements. Interest is computed per positive
/// movement as `amount * interest_rate / 100`; terms below 1 are discarded
/// before summing, so the threshold filters individual contributions, not
/// the total.
pub fn summary(account: &Account) -> AccountSummary {
    let income: Decimal = account
        .movements
        .iter()
        .filter(|movement| **movement > Decimal::ZERO)
        .copied()
        .sum();

    let expense: Decimal = account
        .movements
        .iter()
        .filter(|movement| **movement < Decimal::ZERO)
        .copied()
        .sum::<Decimal>()
        .abs();

    let interest: Decimal = account
        .movements
        .iter()
        .filter(|movement| **movement > Decimal::ZERO)
        .map(|movement| movement * account.interest_rate / Decimal::ONE_HUNDRED)
        .filter(|term| *term >= Decimal::ONE)
        .sum();

    AccountSummary {
        income,
        expense,
        interest,
    }
}

/// Produce the movement list as a display layer presents it
///
/// Each entry reports its 1-based position in original recording order.
/// When `sorted` is set the entries are reordered ascending by amount, but
/// the reported indices still refer to the chronological positions; the
/// underlying movement list is never touched.
pub fn ordered_view(account: &Account, sorted: bool) -> Vec<MovementView> {
    let mut view: Vec<MovementView> = account
        .movements
        .iter()
        .enumerate()
        .map(|(position, amount)| MovementView {
            index: position + 1,
            amount: *amount,
        })
        .collect();

    if sorted {
        view.sort_by(|a, b| a.amount.cmp(&b.amount));
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn account_with(movements: Vec<i64>, interest_rate: Decimal) -> Account {
        Account {
            identifier: "js".to_string(),
            owner: "Jonas Schmedtmann".to_string(),
            pin: 1111,
            interest_rate,
            movements: movements.into_iter().map(|m| Decimal::new(m, 0)).collect(),
        }
    }

    #[test]
    fn test_balance_sums_all_movements() {
        let account = account_with(
            vec![200, 450, -400, 3000, -650, -130, 70, 1300],
            Decimal::new(12, 1),
        );

        assert_eq!(balance(&account).unwrap(), Decimal::new(3840, 0));
    }

    #[test]
    fn test_balance_of_empty_ledger_is_an_error() {
        let account = account_with(vec![], Decimal::ONE);

        let result = balance(&account);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BankError::EmptyLedger { .. }));
    }

    #[test]
    fn test_record_movement_appends_exactly_one_element() {
        let mut account = account_with(vec![200], Decimal::ONE);

        record_movement(&mut account, Decimal::new(-50, 0));

        assert_eq!(account.movements.len(), 2);
        assert_eq!(account.movements[1], Decimal::new(-50, 0));
    }

    #[test]
    fn test_summary_splits_income_and_expense_by_sign() {
        let account = account_with(
            vec![200, 450, -400, 3000, -650, -130, 70, 1300],
            Decimal::new(12, 1),
        );

        let summary = summary(&account);
        assert_eq!(summary.income, Decimal::new(5020, 0));
        assert_eq!(summary.expense, Decimal::new(1180, 0));
    }

    #[test]
    fn test_interest_discards_terms_below_one() {
        // 200 * 1.2% = 2.4 (kept), 450 * 1.2% = 5.4 (kept); -400 contributes nothing
        let account = account_with(vec![200, 450, -400], Decimal::new(12, 1));

        assert_eq!(summary(&account).interest, Decimal::new(78, 1));
    }

    #[test]
    fn test_interest_term_of_fifty_at_low_rate_is_discarded() {
        // 50 * 1.2% = 0.6, below the per-movement threshold of 1
        let account = account_with(vec![50], Decimal::new(12, 1));

        assert_eq!(summary(&account).interest, Decimal::ZERO);
    }

    #[rstest]
    #[case::all_deposits(vec![430, 1000, 700, 50, 90], 2270, 0)]
    #[case::all_withdrawals(vec![-150, -790], 0, 940)]
    #[case::mixed(vec![5000, -150, 3400], 8400, 150)]
    fn test_summary_cases(
        #[case] movements: Vec<i64>,
        #[case] income: i64,
        #[case] expense: i64,
    ) {
        let account = account_with(movements, Decimal::ONE);

        let summary = summary(&account);
        assert_eq!(summary.income, Decimal::new(income, 0));
        assert_eq!(summary.expense, Decimal::new(expense, 0));
    }

    #[test]
    fn test_ordered_view_unsorted_keeps_recording_order() {
        let account = account_with(vec![200, -200, 340], Decimal::ONE);

        let view = ordered_view(&account, false);
        let entries: Vec<(usize, Decimal)> = view
            .iter()
            .map(|entry| (entry.index, entry.amount))
            .collect();
        assert_eq!(
            entries,
            vec![
                (1, Decimal::new(200, 0)),
                (2, Decimal::new(-200, 0)),
                (3, Decimal::new(340, 0)),
            ]
        );
    }

    #[test]
    fn test_ordered_view_sorted_preserves_original_indices() {
        let account = account_with(vec![200, -200, 340], Decimal::ONE);

        let view = ordered_view(&account, true);
        let entries: Vec<(usize, Decimal)> = view
            .iter()
            .map(|entry| (entry.index, entry.amount))
            .collect();
        // Ascending by amount, each entry still reporting its chronological index
        assert_eq!(
            entries,
            vec![
                (2, Decimal::new(-200, 0)),
                (1, Decimal::new(200, 0)),
                (3, Decimal::new(340, 0)),
            ]
        );
    }

    #[test]
    fn test_ordered_view_sorted_is_same_multiset_of_amounts() {
        let account = account_with(vec![200, 450, -400, 3000, -650, -130, 70, 1300], Decimal::ONE);

        let mut unsorted: Vec<Decimal> = ordered_view(&account, false)
            .iter()
            .map(|entry| entry.amount)
            .collect();
        let sorted: Vec<Decimal> = ordered_view(&account, true)
            .iter()
            .map(|entry| entry.amount)
            .collect();

        unsorted.sort();
        assert_eq!(unsorted, sorted);
    }

    #[test]
    fn test_ordered_view_never_mutates_movements() {
        let account = account_with(vec![200, -200, 340], Decimal::ONE);
        let before = account.movements.clone();

        let _ = ordered_view(&account, true);

        assert_eq!(account.movements, before);
    }
}
