//! `SeaORM` Entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use ledgerly_core::transaction::TransactionKind as DomainKind;

/// Transaction kind backed by the Postgres `transaction_kind` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
pub enum TransactionKind {
    /// Money received.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money spent on operations.
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Acquisition of goods or assets.
    #[sea_orm(string_value = "purchase")]
    Purchase,
    /// Revenue from selling goods or services.
    #[sea_orm(string_value = "sale")]
    Sale,
}

impl From<DomainKind> for TransactionKind {
    fn from(kind: DomainKind) -> Self {
        match kind {
            DomainKind::Income => Self::Income,
            DomainKind::Expense => Self::Expense,
            DomainKind::Purchase => Self::Purchase,
            DomainKind::Sale => Self::Sale,
        }
    }
}

impl From<TransactionKind> for DomainKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::Income,
            TransactionKind::Expense => Self::Expense,
            TransactionKind::Purchase => Self::Purchase,
            TransactionKind::Sale => Self::Sale,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub date: Date,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
