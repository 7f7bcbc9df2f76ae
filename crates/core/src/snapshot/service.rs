//! Snapshot aggregation service.

use rust_decimal::Decimal;

use super::classify::{BalanceSheetSlot, COGS_CATEGORY};
use super::ratio::{format_percent, format_ratio};
use super::types::{CategoryTotals, FinancialSnapshot};
use crate::transaction::{Transaction, TransactionKind};

/// Synthetic category appended to the expense breakdown when inventory
/// purchases were made.
const COGS_LABEL: &str = "Cost of Goods Sold";

/// Service for deriving financial snapshots from transaction history.
pub struct SnapshotService;

impl SnapshotService {
    /// Aggregates a transaction history into a complete financial snapshot.
    ///
    /// Pure and deterministic. Monetary totals are order-independent; only
    /// the category breakdowns reflect first-seen input order, and only for
    /// display. Empty input yields an all-zero snapshot with `"0.00"` /
    /// `"0.0%"` ratios.
    #[must_use]
    pub fn aggregate(transactions: &[Transaction]) -> FinancialSnapshot {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut cost_of_goods_sold = Decimal::ZERO;

        let mut cash_in_hand = Decimal::ZERO;
        let mut bank_account = Decimal::ZERO;
        let mut accounts_receivable = Decimal::ZERO;
        let mut equipment = Decimal::ZERO;
        let mut accounts_payable = Decimal::ZERO;
        let mut loans = Decimal::ZERO;
        let mut owners_capital = Decimal::ZERO;

        let mut income_by_category = CategoryTotals::default();
        let mut expenses_by_category = CategoryTotals::default();

        for tx in transactions {
            let amount = tx.amount.value();

            match tx.kind {
                TransactionKind::Income | TransactionKind::Sale => {
                    total_income += amount;
                    income_by_category.add(&tx.category, amount);
                }
                TransactionKind::Expense => {
                    total_expenses += amount;
                    expenses_by_category.add(&tx.category, amount);
                }
                TransactionKind::Purchase => {
                    if tx.category == COGS_CATEGORY {
                        cost_of_goods_sold += amount;
                    }
                }
            }

            if let Some(slot) = BalanceSheetSlot::from_category(&tx.category) {
                let bucket = match slot {
                    BalanceSheetSlot::CashInHand => &mut cash_in_hand,
                    BalanceSheetSlot::BankAccount => &mut bank_account,
                    BalanceSheetSlot::AccountsReceivable => &mut accounts_receivable,
                    BalanceSheetSlot::Equipment => &mut equipment,
                    BalanceSheetSlot::AccountsPayable => &mut accounts_payable,
                    BalanceSheetSlot::Loans => &mut loans,
                    BalanceSheetSlot::OwnersCapital => &mut owners_capital,
                };
                *bucket += slot.signed_delta(tx.kind, amount);
            }
        }

        let gross_profit = total_income - cost_of_goods_sold;
        let net_profit = gross_profit - total_expenses;

        let total_assets = cash_in_hand + bank_account + accounts_receivable + equipment;
        let total_liabilities = accounts_payable + loans;
        let retained_earnings = net_profit;
        let total_equity = owners_capital + retained_earnings;

        let current_assets = cash_in_hand + bank_account + accounts_receivable;
        let current_liabilities = accounts_payable;

        if cost_of_goods_sold > Decimal::ZERO {
            expenses_by_category.add(COGS_LABEL, cost_of_goods_sold);
        }

        FinancialSnapshot {
            total_income,
            cost_of_goods_sold,
            total_expenses,
            gross_profit,
            net_profit,
            cash_in_hand,
            bank_account,
            accounts_receivable,
            equipment,
            total_assets,
            accounts_payable,
            loans,
            total_liabilities,
            owners_capital,
            retained_earnings,
            total_equity,
            current_ratio: format_ratio(current_assets, current_liabilities),
            debt_to_equity: format_ratio(total_liabilities, total_equity),
            gross_margin: format_percent(gross_profit, total_income),
            net_profit_margin: format_percent(net_profit, total_income),
            return_on_assets: format_percent(net_profit, total_assets),
            return_on_equity: format_percent(net_profit, total_equity),
            income_by_category,
            expenses_by_category,
        }
    }
}
