//! Initial database migration.
//!
//! Creates the `transaction_kind` enum and the transactions table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Transaction kinds; amounts are magnitudes, direction comes from the kind
CREATE TYPE transaction_kind AS ENUM (
    'income',
    'expense',
    'purchase',
    'sale'
);
";

const TRANSACTIONS_SQL: &str = r#"
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC(14, 2) NOT NULL CHECK (amount >= 0),
    kind transaction_kind NOT NULL,
    category TEXT NOT NULL,
    "date" DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
"#;

const INDEXES_SQL: &str = r"
-- Listing is always per user, ordered by creation time
CREATE INDEX idx_transactions_user_created ON transactions (user_id, created_at);
CREATE INDEX idx_transactions_user_kind ON transactions (user_id, kind);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS transactions;
DROP TYPE IF EXISTS transaction_kind;
";
