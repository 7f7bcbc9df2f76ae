//! Transaction recording and listing endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_core::interpret;
use ledgerly_core::transaction::{Transaction, TransactionKind};
use ledgerly_db::repositories::{NewTransaction, TransactionFilter, TransactionRepository};
use ledgerly_shared::types::{Amount, TransactionId};

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::SessionUser;

/// Hard cap on list page size.
const MAX_LIST_LIMIT: u64 = 500;

/// Request to record a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Free-text label.
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category string.
    pub category: String,
    /// Business date.
    pub date: NaiveDate,
}

/// Request to interpret a natural-language completion reply.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequest {
    /// Raw reply text from the completion function.
    pub reply: String,
    /// Date to use when the reply does not carry one.
    pub default_date: NaiveDate,
}

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    /// Filter by transaction kind.
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    /// Filter by business date range start.
    pub from: Option<NaiveDate>,
    /// Filter by business date range end.
    pub to: Option<NaiveDate>,
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
}

/// A stored transaction as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction id.
    pub id: String,
    /// Free-text label.
    pub description: String,
    /// Amount.
    pub amount: Decimal,
    /// Transaction kind.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category string.
    pub category: String,
    /// Business date.
    pub date: NaiveDate,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            description: tx.description,
            amount: tx.amount.value(),
            kind: tx.kind,
            category: tx.category,
            date: tx.date,
            created_at: tx.created_at.to_rfc3339(),
        }
    }
}

/// Records a transaction.
async fn create_transaction(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let amount = Amount::new(req.amount)?;

    let repo = TransactionRepository::new(state.db.as_ref().clone());
    let tx = repo
        .insert(NewTransaction {
            user_id: session.user_id(),
            description: req.description,
            amount,
            kind: req.kind,
            category: req.category,
            date: req.date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(tx.into())))
}

/// Interprets a completion reply and records the resulting transaction.
async fn interpret_transaction(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<InterpretRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let draft = interpret::parse_reply(&req.reply)?;

    let repo = TransactionRepository::new(state.db.as_ref().clone());
    let tx = repo
        .insert(NewTransaction {
            user_id: session.user_id(),
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            date: draft.date.unwrap_or(req.default_date),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(tx.into())))
}

/// Lists the session user's transactions.
async fn list_transactions(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let filter = TransactionFilter {
        kind: query.kind,
        date_from: query.from,
        date_to: query.to,
        limit: Some(query.limit.unwrap_or(MAX_LIST_LIMIT).min(MAX_LIST_LIMIT)),
    };

    let repo = TransactionRepository::new(state.db.as_ref().clone());
    let txs = repo.list_for_user(session.user_id(), &filter).await?;

    Ok(Json(txs.into_iter().map(Into::into).collect()))
}

/// Fetches one transaction by id.
async fn get_transaction(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<TransactionId>,
) -> ApiResult<Json<TransactionResponse>> {
    let repo = TransactionRepository::new(state.db.as_ref().clone());
    let tx = repo.find_by_id(session.user_id(), id).await?;
    Ok(Json(tx.into()))
}

/// Deletes one transaction by id.
async fn delete_transaction(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<TransactionId>,
) -> ApiResult<StatusCode> {
    let repo = TransactionRepository::new(state.db.as_ref().clone());
    repo.delete(session.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Creates transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction).get(list_transactions))
        .route("/transactions/interpret", post(interpret_transaction))
        .route(
            "/transactions/{id}",
            get(get_transaction).delete(delete_transaction),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ledgerly_shared::types::UserId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_response_uses_wire_field_names() {
        let tx = Transaction {
            id: TransactionId::new(),
            user_id: UserId::new(),
            description: "Sold goods".to_string(),
            amount: Amount::new(dec!(1000)).unwrap(),
            kind: TransactionKind::Sale,
            category: "cash".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 14).unwrap(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(TransactionResponse::from(tx)).unwrap();
        assert_eq!(value["type"], "sale");
        // Decimal serializes as a string on the wire.
        assert_eq!(value["amount"], "1000");
        assert!(value["createdAt"].is_string());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.kind.is_none());
        assert!(query.from.is_none());
        assert!(query.limit.is_none());
    }
}
