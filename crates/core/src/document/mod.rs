//! Printable invoice and purchase-order documents.
//!
//! Builds the structured document the display layer prints or rasterizes.
//! Layout selection is a closed enum dispatched through exhaustive matches,
//! so adding a variant forces every rendering site to handle it.
//! Rasterization to canvas/PDF is the hosting application's concern.

pub mod render;
pub mod types;

pub use render::DocumentService;
pub use types::{
    DocumentKind, DocumentLayout, DocumentSpec, LineItem, Party, PrintableDocument, RenderedLine,
};
