//! Account domain model

use rust_decimal::Decimal;

use super::amount::{round_for_display, validate_amount, MAX_BALANCE};
use super::result::{Error, Result};

/// The single balance tracked by a session
///
/// The balance is kept at full precision; every value handed back to callers
/// goes through [`round_for_display`]. The balance never drops below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    /// Create an account with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the balance and return the new balance (display-rounded)
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal> {
        let amount = validate_amount(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .filter(|balance| *balance <= MAX_BALANCE)
            .ok_or_else(|| Error::invalid_amount("amount is too large"))?;

        self.balance = balance;
        tracing::debug!(operation = "deposit", "balance updated");
        Ok(round_for_display(self.balance))
    }

    /// Subtract `amount` from the balance and return the new balance (display-rounded)
    ///
    /// Withdrawing exactly the full balance is allowed and leaves zero.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal> {
        let amount = validate_amount(amount)?;
        if amount > self.balance {
            tracing::debug!(operation = "withdraw", kind = "insufficient_funds", "rejected");
            return Err(Error::InsufficientFunds);
        }

        self.balance -= amount;
        debug_assert!(self.balance >= Decimal::ZERO);
        tracing::debug!(operation = "withdraw", "balance updated");
        Ok(round_for_display(self.balance))
    }

    /// Current balance (display-rounded)
    pub fn check_balance(&self) -> Decimal {
        round_for_display(self.balance)
    }

    /// Set the balance directly
    ///
    /// For establishing a known starting state in tests. The shell never calls
    /// this. Zero is allowed, negative values and values above
    /// [`MAX_BALANCE`] are not.
    pub fn reset(&mut self, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(Error::invalid_amount("reset value must not be negative"));
        }
        if value > MAX_BALANCE {
            return Err(Error::invalid_amount("reset value is out of range"));
        }
        self.balance = value;
        Ok(())
    }

    /// Unrounded balance
    pub fn exact_balance(&self) -> Decimal {
        self.balance
    }
}
