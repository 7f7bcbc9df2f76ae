//! Transaction domain types.
//!
//! A transaction is one recorded financial event: income, expense, purchase,
//! or sale. Transactions are immutable inputs to every derived computation;
//! nothing in this crate mutates or persists them.

pub mod types;

pub use types::{Transaction, TransactionKind};
