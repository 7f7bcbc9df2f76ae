//! Parsing of natural-language interpretation replies.
//!
//! The upstream serverless function sends the user's prompt to a completion
//! API and forwards the model's reply here. This module turns that reply
//! into a validated draft transaction. Prompt engineering and the API call
//! itself stay upstream; only the structured-JSON contract lives here.
//!
//! Models frequently wrap JSON in markdown code fences; the parser strips
//! those before deserializing. Unknown transaction kinds and negative
//! amounts are rejected with an error identifying the offending field,
//! never silently ignored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use ledgerly_shared::types::{Amount, AmountError};

use crate::transaction::TransactionKind;

/// Error produced while parsing an interpretation reply.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The reply is not the expected JSON shape (includes unknown `type`
    /// values, which the closed kind enum rejects at deserialization).
    #[error("reply is not a valid transaction JSON object: {0}")]
    Json(#[from] serde_json::Error),

    /// The reply carried a negative amount.
    #[error("reply contained an invalid amount: {0}")]
    Amount(#[from] AmountError),
}

/// Raw reply shape produced by the completion function.
#[derive(Debug, Deserialize)]
struct RawReply {
    description: String,
    amount: Decimal,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    #[serde(default)]
    date: Option<NaiveDate>,
}

/// A validated transaction draft, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransaction {
    /// Free-text label.
    pub description: String,
    /// Validated non-negative amount.
    pub amount: Amount,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Category string, passed through verbatim.
    pub category: String,
    /// Business date, when the model extracted one.
    pub date: Option<NaiveDate>,
}

/// Parses a completion reply into a draft transaction.
///
/// Tolerates markdown code fences around the JSON body.
pub fn parse_reply(raw: &str) -> Result<DraftTransaction, InterpretError> {
    let cleaned = strip_code_fences(raw);
    let reply: RawReply = serde_json::from_str(cleaned)?;
    let amount = Amount::new(reply.amount)?;

    Ok(DraftTransaction {
        description: reply.description,
        amount,
        kind: reply.kind,
        category: reply.category,
        date: reply.date,
    })
}

/// Removes a surrounding markdown code fence, if present.
fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
