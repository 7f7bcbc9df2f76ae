//! Snapshot data types.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-category totals in first-seen insertion order.
///
/// Keys are the literal category strings, never case-normalized; summation
/// accumulates into the first occurrence. Insertion order exists for display
/// only and does not affect any monetary total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Decimal)>,
}

impl CategoryTotals {
    /// Adds `amount` to the total for `category`, inserting at the end on
    /// first occurrence.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        if let Some((_, total)) = self.entries.iter_mut().find(|(c, _)| c == category) {
            *total += amount;
        } else {
            self.entries.push((category.to_string(), amount));
        }
    }

    /// Returns the total for `category`, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, total)| *total)
    }

    /// Returns true if no category has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(c, total)| (c.as_str(), *total))
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, total) in &self.entries {
            map.serialize_entry(category, total)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryTotals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TotalsVisitor;

        impl<'de> Visitor<'de> for TotalsVisitor {
            type Value = CategoryTotals;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of category totals")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut totals = CategoryTotals::default();
                while let Some((category, total)) = access.next_entry::<String, Decimal>()? {
                    totals.add(&category, total);
                }
                Ok(totals)
            }
        }

        deserializer.deserialize_map(TotalsVisitor)
    }
}

/// Complete derived financial state for a set of transactions.
///
/// Serialized in camelCase because dashboard consumers bind to the exact
/// field names and ratio string formats; fields must never be renamed or
/// omitted silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    // === Income statement ===
    /// Sum over transactions of kind income or sale.
    pub total_income: Decimal,
    /// Sum over purchases categorized as inventory.
    pub cost_of_goods_sold: Decimal,
    /// Sum over transactions of kind expense.
    pub total_expenses: Decimal,
    /// `total_income - cost_of_goods_sold`.
    pub gross_profit: Decimal,
    /// `gross_profit - total_expenses`.
    pub net_profit: Decimal,

    // === Assets ===
    /// Running balance of the `cash` bucket.
    pub cash_in_hand: Decimal,
    /// Running balance of the `bank` bucket.
    pub bank_account: Decimal,
    /// Running balance of the `accounts_receivable` bucket.
    pub accounts_receivable: Decimal,
    /// Running balance of the `equipment`/`asset` bucket.
    pub equipment: Decimal,
    /// Sum of the four asset buckets.
    pub total_assets: Decimal,

    // === Liabilities ===
    /// Running balance of the `accounts_payable` bucket.
    pub accounts_payable: Decimal,
    /// Running balance of the `loan` bucket.
    pub loans: Decimal,
    /// Sum of the two liability buckets.
    pub total_liabilities: Decimal,

    // === Equity ===
    /// Running balance of the `capital` bucket.
    pub owners_capital: Decimal,
    /// Equal to `net_profit`.
    pub retained_earnings: Decimal,
    /// `owners_capital + retained_earnings`.
    pub total_equity: Decimal,

    // === Ratios ===
    /// Current assets over current liabilities.
    pub current_ratio: String,
    /// Total liabilities over total equity.
    pub debt_to_equity: String,
    /// Gross profit over total income.
    pub gross_margin: String,
    /// Net profit over total income.
    pub net_profit_margin: String,
    /// Net profit over total assets.
    pub return_on_assets: String,
    /// Net profit over total equity.
    pub return_on_equity: String,

    // === Breakdowns ===
    /// Income totals per category, first-seen order.
    pub income_by_category: CategoryTotals,
    /// Expense totals per category, first-seen order, plus a synthetic
    /// "Cost of Goods Sold" entry when COGS is positive.
    pub expenses_by_category: CategoryTotals,
}
