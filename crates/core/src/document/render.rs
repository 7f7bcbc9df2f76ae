//! Document rendering.

use rust_decimal::Decimal;

use super::types::{
    DocumentKind, DocumentLayout, DocumentSpec, PrintableDocument, RenderedLine,
};

/// Service for rendering printable documents.
pub struct DocumentService;

impl DocumentService {
    /// Renders a document specification into its printable form.
    ///
    /// Pure composition: line totals are quantity times unit price, the
    /// document total is their sum, and every kind/layout variant is
    /// dispatched through an exhaustive match.
    #[must_use]
    pub fn render(spec: &DocumentSpec) -> PrintableDocument {
        let title = match spec.kind {
            DocumentKind::Invoice => "INVOICE",
            DocumentKind::PurchaseOrder => "PURCHASE ORDER",
        };

        let counterparty_label = match spec.kind {
            DocumentKind::Invoice => "Bill To",
            DocumentKind::PurchaseOrder => "Vendor",
        };

        let lines: Vec<RenderedLine> = spec
            .lines
            .iter()
            .map(|line| RenderedLine {
                description: line.description.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price.value(),
                total: line.extended_total(),
            })
            .collect();

        let total: Decimal = lines.iter().map(|line| line.total).sum();

        let mut header = Vec::new();
        let mut footer = Vec::new();

        match spec.layout {
            DocumentLayout::Classic => {
                header.push(spec.issuer.name.clone());
                header.extend(spec.issuer.details.iter().cloned());
                header.push(format!("{title} {}", spec.number));
                header.push(format!("Issued: {}", spec.issued_on));
                if let Some(due_on) = spec.due_on {
                    header.push(format!("Due: {due_on}"));
                }
            }
            DocumentLayout::Compact => {
                // Single header line; issuer details move to the footer.
                header.push(format!("{} | {title} {}", spec.issuer.name, spec.number));
                header.push(format!(
                    "Issued {}{}",
                    spec.issued_on,
                    spec.due_on
                        .map(|due_on| format!(" / Due {due_on}"))
                        .unwrap_or_default()
                ));
                footer.extend(spec.issuer.details.iter().cloned());
            }
            DocumentLayout::Letterhead => {
                header.push(spec.issuer.name.to_uppercase());
                header.extend(spec.issuer.details.iter().cloned());
                header.push(String::new());
                header.push(format!("{title} {}", spec.number));
                header.push(format!("Issued: {}", spec.issued_on));
                if let Some(due_on) = spec.due_on {
                    header.push(format!("Due: {due_on}"));
                }
            }
        }

        if let Some(notes) = &spec.notes {
            footer.push(notes.clone());
        }

        PrintableDocument {
            title: title.to_string(),
            number: spec.number.clone(),
            layout: spec.layout,
            header,
            counterparty_label: counterparty_label.to_string(),
            issuer: spec.issuer.clone(),
            counterparty: spec.counterparty.clone(),
            lines,
            total,
            footer,
        }
    }
}
