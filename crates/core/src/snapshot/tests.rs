//! Property-based and unit tests for snapshot aggregation.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ledgerly_shared::types::{Amount, TransactionId, UserId};

use super::service::SnapshotService;
use super::types::{CategoryTotals, FinancialSnapshot};
use crate::transaction::{Transaction, TransactionKind};

fn tx(kind: TransactionKind, category: &str, amount: Decimal) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        user_id: UserId::new(),
        description: format!("{kind} {category}"),
        amount: Amount::new(amount).unwrap(),
        kind,
        category: category.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 5, 14).unwrap(),
        created_at: Utc::now(),
    }
}

/// All monetary fields of a snapshot, for order-invariance comparisons.
fn monetary_fields(s: &FinancialSnapshot) -> [Decimal; 16] {
    [
        s.total_income,
        s.cost_of_goods_sold,
        s.total_expenses,
        s.gross_profit,
        s.net_profit,
        s.cash_in_hand,
        s.bank_account,
        s.accounts_receivable,
        s.equipment,
        s.total_assets,
        s.accounts_payable,
        s.loans,
        s.total_liabilities,
        s.owners_capital,
        s.retained_earnings,
        s.total_equity,
    ]
}

fn sorted_entries(totals: &CategoryTotals) -> Vec<(String, Decimal)> {
    let mut entries: Vec<_> = totals
        .iter()
        .map(|(category, total)| (category.to_string(), total))
        .collect();
    entries.sort();
    entries
}

fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense),
        Just(TransactionKind::Purchase),
        Just(TransactionKind::Sale),
    ]
}

fn arb_category() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("cash"),
        Just("bank"),
        Just("accounts_receivable"),
        Just("equipment"),
        Just("asset"),
        Just("accounts_payable"),
        Just("loan"),
        Just("capital"),
        Just("inventory"),
        Just("rent"),
        Just("consulting"),
        Just("utilities"),
    ]
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (arb_kind(), arb_category(), 0i64..1_000_000).prop_map(|(kind, category, cents)| {
        tx(kind, category, Decimal::new(cents, 2))
    })
}

proptest! {
    /// Aggregation is deterministic: the same input yields identical output,
    /// category maps included.
    #[test]
    fn test_aggregate_is_deterministic(
        transactions in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let first = SnapshotService::aggregate(&transactions);
        let second = SnapshotService::aggregate(&transactions);
        prop_assert_eq!(first, second);
    }

    /// Permuting the input changes no monetary total and no ratio string;
    /// only category-map insertion order may differ.
    #[test]
    fn test_aggregate_is_order_invariant(
        transactions in prop::collection::vec(arb_transaction(), 0..40),
        shuffled in prop::collection::vec(arb_transaction(), 0..40).prop_shuffle(),
    ) {
        // Reversal exercises a deterministic permutation of the same list.
        let mut reversed = transactions.clone();
        reversed.reverse();

        let original = SnapshotService::aggregate(&transactions);
        let permuted = SnapshotService::aggregate(&reversed);

        prop_assert_eq!(monetary_fields(&original), monetary_fields(&permuted));
        prop_assert_eq!(&original.current_ratio, &permuted.current_ratio);
        prop_assert_eq!(&original.debt_to_equity, &permuted.debt_to_equity);
        prop_assert_eq!(&original.gross_margin, &permuted.gross_margin);
        prop_assert_eq!(
            sorted_entries(&original.income_by_category),
            sorted_entries(&permuted.income_by_category)
        );
        prop_assert_eq!(
            sorted_entries(&original.expenses_by_category),
            sorted_entries(&permuted.expenses_by_category)
        );

        // The shuffled independent sample keeps the generator honest; its
        // snapshot must at least be self-consistent.
        let other = SnapshotService::aggregate(&shuffled);
        prop_assert_eq!(other.gross_profit, other.total_income - other.cost_of_goods_sold);
    }

    /// totalIncome covers exactly the income/sale transactions and
    /// totalExpenses exactly the expense transactions.
    #[test]
    fn test_partition_completeness(
        transactions in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let expected_income: Decimal = transactions
            .iter()
            .filter(|t| matches!(t.kind, TransactionKind::Income | TransactionKind::Sale))
            .map(|t| t.amount.value())
            .sum();
        let expected_expenses: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount.value())
            .sum();
        let expected_cogs: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Purchase && t.category == "inventory")
            .map(|t| t.amount.value())
            .sum();

        let snapshot = SnapshotService::aggregate(&transactions);

        prop_assert_eq!(snapshot.total_income, expected_income);
        prop_assert_eq!(snapshot.total_expenses, expected_expenses);
        prop_assert_eq!(snapshot.cost_of_goods_sold, expected_cogs);
    }

    /// Net profit is exactly (income - COGS) - expenses, with no rounding
    /// drift across the derived fields.
    #[test]
    fn test_profit_identity(
        transactions in prop::collection::vec(arb_transaction(), 0..40),
    ) {
        let snapshot = SnapshotService::aggregate(&transactions);

        prop_assert_eq!(
            snapshot.gross_profit,
            snapshot.total_income - snapshot.cost_of_goods_sold
        );
        prop_assert_eq!(
            snapshot.net_profit,
            (snapshot.total_income - snapshot.cost_of_goods_sold) - snapshot.total_expenses
        );
        prop_assert_eq!(snapshot.retained_earnings, snapshot.net_profit);
        prop_assert_eq!(
            snapshot.total_equity,
            snapshot.owners_capital + snapshot.retained_earnings
        );
        prop_assert_eq!(
            snapshot.total_assets,
            snapshot.cash_in_hand
                + snapshot.bank_account
                + snapshot.accounts_receivable
                + snapshot.equipment
        );
        prop_assert_eq!(
            snapshot.total_liabilities,
            snapshot.accounts_payable + snapshot.loans
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zero_snapshot() {
        let snapshot = SnapshotService::aggregate(&[]);

        for field in monetary_fields(&snapshot) {
            assert_eq!(field, dec!(0));
        }
        assert_eq!(snapshot.current_ratio, "0.00");
        assert_eq!(snapshot.debt_to_equity, "0.00");
        assert_eq!(snapshot.gross_margin, "0.0%");
        assert_eq!(snapshot.net_profit_margin, "0.0%");
        assert_eq!(snapshot.return_on_assets, "0.0%");
        assert_eq!(snapshot.return_on_equity, "0.0%");
        assert!(snapshot.income_by_category.is_empty());
        assert!(snapshot.expenses_by_category.is_empty());
    }

    #[test]
    fn test_infinity_rule_for_current_ratio() {
        let transactions = vec![tx(TransactionKind::Sale, "cash", dec!(100))];
        let snapshot = SnapshotService::aggregate(&transactions);

        // Positive current assets over zero current liabilities.
        assert_eq!(snapshot.current_ratio, "∞");
        // Zero liabilities over positive equity.
        assert_eq!(snapshot.debt_to_equity, "0.00");
    }

    #[test]
    fn test_concrete_scenario() {
        let transactions = vec![
            tx(TransactionKind::Sale, "cash", dec!(1000)),
            tx(TransactionKind::Expense, "rent", dec!(300)),
            tx(TransactionKind::Purchase, "inventory", dec!(200)),
        ];
        let snapshot = SnapshotService::aggregate(&transactions);

        assert_eq!(snapshot.total_income, dec!(1000));
        assert_eq!(snapshot.cost_of_goods_sold, dec!(200));
        assert_eq!(snapshot.total_expenses, dec!(300));
        assert_eq!(snapshot.gross_profit, dec!(800));
        assert_eq!(snapshot.net_profit, dec!(500));
        assert_eq!(snapshot.cash_in_hand, dec!(1000));
        assert_eq!(snapshot.total_assets, dec!(1000));
        assert_eq!(snapshot.retained_earnings, dec!(500));
        assert_eq!(snapshot.total_equity, dec!(500));

        assert_eq!(snapshot.gross_margin, "80.0%");
        assert_eq!(snapshot.net_profit_margin, "50.0%");
        assert_eq!(snapshot.return_on_assets, "50.0%");
        assert_eq!(snapshot.return_on_equity, "100.0%");

        let income: Vec<_> = snapshot.income_by_category.iter().collect();
        assert_eq!(income, vec![("cash", dec!(1000))]);

        let expenses: Vec<_> = snapshot.expenses_by_category.iter().collect();
        assert_eq!(
            expenses,
            vec![("rent", dec!(300)), ("Cost of Goods Sold", dec!(200))]
        );
    }

    #[test]
    fn test_synthetic_cogs_entry_iff_cogs_positive() {
        // Inventory purchase: synthetic entry appears even with no expenses.
        let with_cogs = SnapshotService::aggregate(&[tx(
            TransactionKind::Purchase,
            "inventory",
            dec!(75),
        )]);
        assert_eq!(
            with_cogs.expenses_by_category.get("Cost of Goods Sold"),
            Some(dec!(75))
        );

        // Non-inventory purchase: no COGS, no synthetic entry.
        let without_cogs = SnapshotService::aggregate(&[tx(
            TransactionKind::Purchase,
            "equipment",
            dec!(75),
        )]);
        assert_eq!(without_cogs.cost_of_goods_sold, dec!(0));
        assert!(
            without_cogs
                .expenses_by_category
                .get("Cost of Goods Sold")
                .is_none()
        );
    }

    #[test]
    fn test_cogs_category_match_is_case_sensitive() {
        let snapshot = SnapshotService::aggregate(&[tx(
            TransactionKind::Purchase,
            "Inventory",
            dec!(75),
        )]);
        assert_eq!(snapshot.cost_of_goods_sold, dec!(0));
    }

    #[test]
    fn test_buckets_are_running_balances_not_sums() {
        let transactions = vec![
            tx(TransactionKind::Sale, "cash", dec!(1000)),
            tx(TransactionKind::Expense, "cash", dec!(300)),
        ];
        let snapshot = SnapshotService::aggregate(&transactions);

        // The expense drains the cash bucket while still counting as an
        // expense keyed on the literal category.
        assert_eq!(snapshot.cash_in_hand, dec!(700));
        assert_eq!(snapshot.total_expenses, dec!(300));
        assert_eq!(snapshot.expenses_by_category.get("cash"), Some(dec!(300)));
    }

    #[test]
    fn test_loan_proceeds_and_repayment() {
        let transactions = vec![
            tx(TransactionKind::Income, "loan", dec!(5000)),
            tx(TransactionKind::Expense, "loan", dec!(1500)),
        ];
        let snapshot = SnapshotService::aggregate(&transactions);

        assert_eq!(snapshot.loans, dec!(3500));
        assert_eq!(snapshot.total_liabilities, dec!(3500));
        // Loan movements still flow through the income/expense statement.
        assert_eq!(snapshot.total_income, dec!(5000));
        assert_eq!(snapshot.total_expenses, dec!(1500));
    }

    #[test]
    fn test_unmatched_category_skips_balance_sheet() {
        let snapshot =
            SnapshotService::aggregate(&[tx(TransactionKind::Income, "consulting", dec!(900))]);

        assert_eq!(snapshot.total_income, dec!(900));
        assert_eq!(snapshot.income_by_category.get("consulting"), Some(dec!(900)));
        assert_eq!(snapshot.total_assets, dec!(0));
        assert_eq!(snapshot.total_liabilities, dec!(0));
        assert_eq!(snapshot.owners_capital, dec!(0));
    }

    #[test]
    fn test_snapshot_serializes_in_camel_case() {
        let snapshot = SnapshotService::aggregate(&[tx(
            TransactionKind::Sale,
            "cash",
            dec!(10),
        )]);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json.get("totalIncome").is_some());
        assert!(json.get("costOfGoodsSold").is_some());
        assert!(json.get("ownersCapital").is_some());
        assert!(json.get("incomeByCategory").is_some());
        assert!(json.get("total_income").is_none());
    }
}
