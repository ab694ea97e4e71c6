//! Property tests for the Account balance rules
//!
//! Amounts are generated as integer thousandths so that sub-cent precision is
//! exercised alongside whole cents.

use proptest::prelude::*;
use rust_decimal::Decimal;

use piggybank_core::{round_for_display, Account, Error};

/// Positive amount between 0.001 and 1_000_000.000
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000_000).prop_map(|thousandths| Decimal::new(thousandths, 3))
}

/// Zero or negative amount
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=0).prop_map(|thousandths| Decimal::new(thousandths, 3))
}

fn account_with(balance: Decimal) -> Account {
    let mut account = Account::new();
    account.reset(balance).unwrap();
    account
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(Decimal),
    Withdraw(Decimal),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1_000_000i64..=1_000_000).prop_map(|c| Op::Deposit(Decimal::new(c, 2))),
        (-1_000_000i64..=1_000_000).prop_map(|c| Op::Withdraw(Decimal::new(c, 2))),
    ]
}

proptest! {
    #[test]
    fn prop_deposit_adds_exactly(start in positive_amount(), amount in positive_amount()) {
        let mut account = account_with(start);
        let returned = account.deposit(amount).unwrap();

        prop_assert_eq!(account.exact_balance(), start + amount);
        prop_assert_eq!(returned, round_for_display(start + amount));
    }

    #[test]
    fn prop_withdraw_within_balance_subtracts_exactly(
        start in positive_amount(),
        fraction in 1u32..=1000,
    ) {
        let amount = (start * Decimal::new(fraction as i64, 3)).round_dp(3);
        prop_assume!(amount > Decimal::ZERO);

        let mut account = account_with(start);
        let returned = account.withdraw(amount).unwrap();

        prop_assert_eq!(account.exact_balance(), start - amount);
        prop_assert_eq!(returned, round_for_display(start - amount));
    }

    #[test]
    fn prop_withdraw_full_balance_is_zero(start in positive_amount()) {
        let mut account = account_with(start);
        prop_assert_eq!(account.withdraw(start), Ok(Decimal::ZERO));
        prop_assert_eq!(account.exact_balance(), Decimal::ZERO);
    }

    #[test]
    fn prop_overdraw_is_rejected_without_change(
        start in positive_amount(),
        excess in positive_amount(),
    ) {
        let mut account = account_with(start);
        prop_assert_eq!(account.withdraw(start + excess), Err(Error::InsufficientFunds));
        prop_assert_eq!(account.exact_balance(), start);
    }

    #[test]
    fn prop_non_positive_is_rejected_without_change(
        start in positive_amount(),
        amount in non_positive_amount(),
    ) {
        let mut account = account_with(start);
        prop_assert!(matches!(account.deposit(amount), Err(Error::InvalidAmount(_))));
        prop_assert!(matches!(account.withdraw(amount), Err(Error::InvalidAmount(_))));
        prop_assert_eq!(account.exact_balance(), start);
    }

    #[test]
    fn prop_balance_never_negative(ops in prop::collection::vec(op(), 0..64)) {
        let mut account = Account::new();
        for op in ops {
            let before = account.exact_balance();
            let result = match op {
                Op::Deposit(amount) => account.deposit(amount),
                Op::Withdraw(amount) => account.withdraw(amount),
            };
            if result.is_err() {
                prop_assert_eq!(account.exact_balance(), before);
            }
            prop_assert!(account.exact_balance() >= Decimal::ZERO);
            prop_assert!(account.check_balance() >= Decimal::ZERO);
        }
    }
}
