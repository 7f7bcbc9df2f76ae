//! Dashboard endpoints.

use axum::{Json, Router, extract::State, routing::get};

use ledgerly_core::snapshot::{FinancialSnapshot, SnapshotService};
use ledgerly_db::repositories::{TransactionFilter, TransactionRepository};

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::SessionUser;

/// Computes the financial snapshot over the user's full history.
async fn get_snapshot(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<FinancialSnapshot>> {
    let repo = TransactionRepository::new(state.db.as_ref().clone());
    let txs = repo
        .list_for_user(session.user_id(), &TransactionFilter::default())
        .await?;

    Ok(Json(SnapshotService::aggregate(&txs)))
}

/// Creates dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/snapshot", get(get_snapshot))
}
