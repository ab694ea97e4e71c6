//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod account;
pub mod amount;
mod receipt;
pub mod result;

pub use account::Account;
pub use amount::{
    amount_from_f64, parse_amount, round_for_display, validate_amount, CURRENCY_DECIMALS, MAX_BALANCE,
};
pub use receipt::{Action, Receipt};
