//! Shared domain types.

pub mod amount;
pub mod id;

pub use amount::{Amount, AmountError};
pub use id::{TransactionId, UserId};
