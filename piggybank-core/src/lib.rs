//! Piggybank Core - Business logic for a single in-memory balance
//!
//! - **domain**: the [`Account`], the shared amount rule, display rounding,
//!   receipts and error types
//!
//! The balance lives only as long as the [`Account`] value that holds it.
//! Nothing is persisted.

pub mod domain;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{
    amount_from_f64, parse_amount, round_for_display, validate_amount, Account, Action, Receipt,
    CURRENCY_DECIMALS, MAX_BALANCE,
};
