//! Core business logic for Ledgerly.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `transaction` - Transaction domain types
//! - `snapshot` - Financial aggregation and derived ratios
//! - `interpret` - Parsing of natural-language interpretation replies
//! - `document` - Printable invoice and purchase-order documents
//! - `session` - Explicit per-request session context

pub mod document;
pub mod interpret;
pub mod session;
pub mod snapshot;
pub mod transaction;
