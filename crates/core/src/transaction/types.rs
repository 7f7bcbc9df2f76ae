//! Transaction types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::{Amount, TransactionId, UserId};

/// The closed set of transaction kinds.
///
/// The kind determines the direction of a transaction's financial effect;
/// amounts themselves are always non-negative. Unknown kinds are rejected at
/// deserialization, so downstream aggregation never sees an unclassifiable
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received (salary, capital injection, loan proceeds).
    Income,
    /// Money spent on operations (rent, salaries, repayments).
    Expense,
    /// Acquisition of goods or assets (inventory, equipment).
    Purchase,
    /// Revenue from selling goods or services.
    Sale,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Purchase => write!(f, "purchase"),
            Self::Sale => write!(f, "sale"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "purchase" => Ok(Self::Purchase),
            "sale" => Ok(Self::Sale),
            _ => Err(format!("Unknown transaction kind: {s}")),
        }
    }
}

/// One recorded financial event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Free-text label.
    pub description: String,
    /// Non-negative magnitude; direction comes from `kind`.
    pub amount: Amount,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Open classification string (balance-sheet literals or an arbitrary
    /// income/expense grouping).
    pub category: String,
    /// Business date of the transaction.
    pub date: NaiveDate,
    /// Record-creation timestamp; used for ordering and "today" filters,
    /// never by aggregation.
    pub created_at: DateTime<Utc>,
}
