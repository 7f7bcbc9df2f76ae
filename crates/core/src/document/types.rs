//! Document data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::Amount;

/// The kind of printable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Outgoing invoice to a customer.
    Invoice,
    /// Purchase order to a vendor.
    PurchaseOrder,
}

/// The closed set of document layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentLayout {
    /// Standard layout with full header block.
    Classic,
    /// Dense layout for single-page printing.
    Compact,
    /// Branded letterhead layout. Pro plans only.
    Letterhead,
}

impl DocumentLayout {
    /// Returns true if this layout is reserved for Pro sessions.
    #[must_use]
    pub const fn requires_pro(self) -> bool {
        match self {
            Self::Classic | Self::Compact => false,
            Self::Letterhead => true,
        }
    }
}

/// A party named on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Display name.
    pub name: String,
    /// Address and contact lines, rendered in order.
    #[serde(default)]
    pub details: Vec<String>,
}

/// One billable line on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// What was sold or ordered.
    pub description: String,
    /// Quantity; fractional quantities are allowed (hours, weights).
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Amount,
}

impl LineItem {
    /// Quantity times unit price.
    #[must_use]
    pub fn extended_total(&self) -> Decimal {
        self.quantity * self.unit_price.value()
    }
}

/// Everything needed to render a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSpec {
    /// Document kind.
    pub kind: DocumentKind,
    /// Requested layout.
    pub layout: DocumentLayout,
    /// Document number (e.g. `INV-2026-0042`).
    pub number: String,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Due date, if any.
    pub due_on: Option<NaiveDate>,
    /// Issuing business.
    pub issuer: Party,
    /// Customer or vendor.
    pub counterparty: Party,
    /// Billable lines.
    pub lines: Vec<LineItem>,
    /// Free-text notes printed in the footer.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A rendered document line with its extended total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Line description.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Quantity times unit price.
    pub total: Decimal,
}

/// The structured document handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintableDocument {
    /// Document title (e.g. `INVOICE`).
    pub title: String,
    /// Document number.
    pub number: String,
    /// Layout the document was rendered with.
    pub layout: DocumentLayout,
    /// Header lines, top to bottom.
    pub header: Vec<String>,
    /// Label for the counterparty block (`Bill To` / `Vendor`).
    pub counterparty_label: String,
    /// Issuing business.
    pub issuer: Party,
    /// Customer or vendor.
    pub counterparty: Party,
    /// Rendered lines.
    pub lines: Vec<RenderedLine>,
    /// Sum of line totals.
    pub total: Decimal,
    /// Footer lines, top to bottom.
    pub footer: Vec<String>,
}
