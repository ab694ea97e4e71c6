//! Receipt domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::round_for_display;

/// Which command produced a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deposit,
    Withdraw,
    Balance,
}

/// Display-ready outcome of a successful command
///
/// `amount` is the value moved (absent for balance checks). Both values are
/// rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub action: Action,
    pub amount: Option<Decimal>,
    pub balance: Decimal,
}

impl Receipt {
    /// Receipt for a deposit
    pub fn deposit(amount: Decimal, balance: Decimal) -> Self {
        Self::moved(Action::Deposit, amount, balance)
    }

    /// Receipt for a withdrawal
    pub fn withdraw(amount: Decimal, balance: Decimal) -> Self {
        Self::moved(Action::Withdraw, amount, balance)
    }

    /// Receipt for a balance check
    pub fn balance(balance: Decimal) -> Self {
        Self {
            action: Action::Balance,
            amount: None,
            balance: round_for_display(balance),
        }
    }

    fn moved(action: Action, amount: Decimal, balance: Decimal) -> Self {
        Self {
            action,
            amount: Some(round_for_display(amount)),
            balance: round_for_display(balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_receipt_rounds_amount() {
        let receipt = Receipt::deposit(dec!(10.005), dec!(10.005));
        assert_eq!(receipt.amount, Some(dec!(10.00)));
        assert_eq!(receipt.balance, dec!(10.00));
    }

    #[test]
    fn test_receipt_json() {
        let receipt = Receipt::withdraw(dec!(40), dec!(60));
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "withdraw", "amount": "40.00", "balance": "60.00"})
        );

        let json = serde_json::to_value(Receipt::balance(dec!(60))).unwrap();
        assert_eq!(json["action"], "balance");
        assert!(json["amount"].is_null());
    }
}
