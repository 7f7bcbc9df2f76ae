//! Transaction repository for transaction table operations.
//!
//! Rows are immutable once written: the repository offers insert, lookup,
//! listing, and delete, but no update. Listing is always scoped to a user
//! and ordered by creation time, which is what the dashboard consumes.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use ledgerly_core::transaction::{Transaction, TransactionKind};
use ledgerly_shared::types::{Amount, TransactionId, UserId};

use crate::entities::transactions;

/// Error types for transaction storage operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionStoreError {
    /// Transaction not found (or owned by another user).
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// A stored row violates the non-negative amount invariant.
    #[error("Transaction {0} has a negative stored amount")]
    NegativeStoredAmount(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for recording a transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Owning user.
    pub user_id: UserId,
    /// Free-text label.
    pub description: String,
    /// Non-negative amount.
    pub amount: Amount,
    /// Transaction kind.
    pub kind: TransactionKind,
    /// Category string.
    pub category: String,
    /// Business date.
    pub date: NaiveDate,
}

/// Filter options for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by transaction kind.
    pub kind: Option<TransactionKind>,
    /// Filter by business date range start.
    pub date_from: Option<NaiveDate>,
    /// Filter by business date range end.
    pub date_to: Option<NaiveDate>,
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
}

/// Transaction repository for storage operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a transaction and returns the stored domain record.
    pub async fn insert(
        &self,
        input: NewTransaction,
    ) -> Result<Transaction, TransactionStoreError> {
        let model = transactions::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(input.user_id.into_inner()),
            description: Set(input.description),
            amount: Set(input.amount.value()),
            kind: Set(input.kind.into()),
            category: Set(input.category),
            date: Set(input.date),
            created_at: Set(Utc::now().into()),
        };

        let stored = model.insert(&self.db).await?;
        to_domain(stored)
    }

    /// Finds a transaction by id, scoped to its owner.
    pub async fn find_by_id(
        &self,
        user_id: UserId,
        id: TransactionId,
    ) -> Result<Transaction, TransactionStoreError> {
        let model = transactions::Entity::find_by_id(id.into_inner())
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await?
            .ok_or(TransactionStoreError::NotFound(id.into_inner()))?;

        to_domain(model)
    }

    /// Lists a user's transactions ordered by creation time.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, TransactionStoreError> {
        let mut query = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(transactions::Column::CreatedAt);

        if let Some(kind) = filter.kind {
            query = query.filter(
                transactions::Column::Kind.eq(transactions::TransactionKind::from(kind)),
            );
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(transactions::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(transactions::Column::Date.lte(date_to));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Deletes a transaction, scoped to its owner.
    pub async fn delete(
        &self,
        user_id: UserId,
        id: TransactionId,
    ) -> Result<(), TransactionStoreError> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id.into_inner()))
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(TransactionStoreError::NotFound(id.into_inner()));
        }
        Ok(())
    }
}

/// Converts a stored row into the domain record, re-checking the amount
/// invariant the database enforces with a CHECK constraint.
fn to_domain(model: transactions::Model) -> Result<Transaction, TransactionStoreError> {
    let amount = Amount::new(model.amount)
        .map_err(|_| TransactionStoreError::NegativeStoredAmount(model.id))?;

    Ok(Transaction {
        id: TransactionId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        description: model.description,
        amount,
        kind: model.kind.into(),
        category: model.category,
        date: model.date,
        created_at: model.created_at.into(),
    })
}
