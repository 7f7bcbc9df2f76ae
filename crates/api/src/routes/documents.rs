//! Printable document endpoints.

use axum::{Json, Router, routing::post};

use ledgerly_core::document::{DocumentService, DocumentSpec, PrintableDocument};
use ledgerly_shared::AppError;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::SessionUser;

/// Renders a printable document from its specification.
///
/// The letterhead layout is a paid feature; rendering it on a free plan
/// is refused with 403 rather than silently falling back to another
/// layout.
async fn render_document(
    session: SessionUser,
    Json(spec): Json<DocumentSpec>,
) -> ApiResult<Json<PrintableDocument>> {
    if spec.layout.requires_pro() && !session.context().is_pro() {
        return Err(
            AppError::Forbidden("The letterhead layout requires a Pro plan".to_string()).into(),
        );
    }

    Ok(Json(DocumentService::render(&spec)))
}

/// Creates document routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/documents/render", post(render_document))
}
