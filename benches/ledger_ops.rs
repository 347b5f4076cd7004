//! Benchmark suite for the ledger derivation functions
//!
//! These benchmarks measure the on-demand derivations (balance, summary,
//! ordered view) over synthetically sized movement lists, plus the full
//! transfer path through the engine. Inputs are generated in code; the
//! ledger core needs no files.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use divan::Bencher;
use rust_bank_ledger::core::ledger;
use rust_bank_ledger::{Account, AccountSeed, BankEngine};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

/// Build an account with an alternating deposit/withdrawal history
fn synthetic_account(movement_count: usize) -> Account {
    let movements = (0..movement_count)
        .map(|i| {
            let amount = Decimal::new(50 + (i as i64 % 200) * 10, 0);
            if i % 3 == 2 {
                -amount
            } else {
                amount
            }
        })
        .collect();

    Account {
        identifier: "js".to_string(),
        owner: "Jonas Schmedtmann".to_string(),
        pin: 1111,
        interest_rate: Decimal::new(12, 1),
        movements,
    }
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn balance(bencher: Bencher, movement_count: usize) {
    let account = synthetic_account(movement_count);

    bencher.bench_local(|| divan::black_box(ledger::balance(divan::black_box(&account))));
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn summary(bencher: Bencher, movement_count: usize) {
    let account = synthetic_account(movement_count);

    bencher.bench_local(|| divan::black_box(ledger::summary(divan::black_box(&account))));
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn ordered_view_sorted(bencher: Bencher, movement_count: usize) {
    let account = synthetic_account(movement_count);

    bencher
        .bench_local(|| divan::black_box(ledger::ordered_view(divan::black_box(&account), true)));
}

#[divan::bench]
fn transfer_roundtrip(bencher: Bencher) {
    bencher
        .with_inputs(|| {
            let mut engine = BankEngine::with_accounts(vec![
                AccountSeed {
                    owner: "Jonas Schmedtmann".to_string(),
                    pin: 1111,
                    interest_rate: Decimal::new(12, 1),
                    movements: vec![Decimal::new(5000, 0)],
                },
                AccountSeed {
                    owner: "Jessica Davis".to_string(),
                    pin: 2222,
                    interest_rate: Decimal::new(15, 1),
                    movements: vec![Decimal::new(5000, 0)],
                },
            ])
            .expect("seed registration failed");
            engine.login("js", 1111).expect("login failed");
            engine
        })
        .bench_local_values(|mut engine| {
            engine
                .transfer("jd", Decimal::ONE)
                .expect("transfer failed");
            engine
        });
}
