//! Repository abstractions for data access.

pub mod transaction;

pub use transaction::{
    NewTransaction, TransactionFilter, TransactionRepository, TransactionStoreError,
};
