//! Balance-sheet classification of transaction categories.

use rust_decimal::Decimal;

use crate::transaction::TransactionKind;

/// Category literal that marks a purchase as cost of goods sold.
pub const COGS_CATEGORY: &str = "inventory";

/// The balance-sheet bucket a transaction category maps to.
///
/// Classification is an exact, case-sensitive match on the lowercase
/// category literals below; `"Cash"` or `"CASH"` do not classify. A
/// transaction whose category matches no literal contributes to the
/// income/expense aggregates only, never to a balance-sheet bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSheetSlot {
    /// Category `"cash"`.
    CashInHand,
    /// Category `"bank"`.
    BankAccount,
    /// Category `"accounts_receivable"`.
    AccountsReceivable,
    /// Category `"equipment"` or `"asset"`.
    Equipment,
    /// Category `"accounts_payable"`.
    AccountsPayable,
    /// Category `"loan"`.
    Loans,
    /// Category `"capital"`.
    OwnersCapital,
}

impl BalanceSheetSlot {
    /// Exact-match parser over the documented category literals.
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "cash" => Some(Self::CashInHand),
            "bank" => Some(Self::BankAccount),
            "accounts_receivable" => Some(Self::AccountsReceivable),
            "equipment" | "asset" => Some(Self::Equipment),
            "accounts_payable" => Some(Self::AccountsPayable),
            "loan" => Some(Self::Loans),
            "capital" => Some(Self::OwnersCapital),
            _ => None,
        }
    }

    /// Signed effect of a transaction on this bucket's running balance.
    ///
    /// Liquid asset buckets grow on income/sale and shrink on
    /// expense/purchase. Equipment capitalizes purchases and shrinks on
    /// disposal (sale). Payables grow when billed (expense/purchase) and
    /// shrink when settled (income/sale). Loans and owner's capital grow on
    /// income (proceeds/injection) and shrink on expense
    /// (repayment/withdrawal); other kinds leave them untouched.
    #[must_use]
    pub fn signed_delta(self, kind: TransactionKind, amount: Decimal) -> Decimal {
        use TransactionKind::{Expense, Income, Purchase, Sale};

        match self {
            Self::CashInHand | Self::BankAccount | Self::AccountsReceivable => match kind {
                Income | Sale => amount,
                Expense | Purchase => -amount,
            },
            Self::Equipment => match kind {
                Purchase => amount,
                Sale => -amount,
                Income | Expense => Decimal::ZERO,
            },
            Self::AccountsPayable => match kind {
                Expense | Purchase => amount,
                Income | Sale => -amount,
            },
            Self::Loans | Self::OwnersCapital => match kind {
                Income => amount,
                Expense => -amount,
                Purchase | Sale => Decimal::ZERO,
            },
        }
    }
}
