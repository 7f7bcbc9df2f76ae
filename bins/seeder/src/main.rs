//! Database seeder for Ledgerly development and testing.
//!
//! Seeds a month of bookkeeping activity for the demo user so the
//! dashboard and document screens have data to show.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use ledgerly_db::entities::transactions;

/// Demo user ID (consistent for all seeds)
const DEMO_USER_ID: &str = "00000000-0000-0000-0000-000000000002";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = ledgerly_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo transactions...");
    seed_demo_transactions(&db).await;

    println!("Seeding complete!");
}

fn demo_user_id() -> Uuid {
    Uuid::parse_str(DEMO_USER_ID).unwrap()
}

/// Seeds a representative month of activity for the demo user.
async fn seed_demo_transactions(db: &DatabaseConnection) {
    // Check if the demo user already has data
    let existing = transactions::Entity::find()
        .filter(transactions::Column::UserId.eq(demo_user_id()))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Demo transactions already exist, skipping...");
        return;
    }

    // (description, amount in cents, kind, category, day of month)
    let rows: &[(&str, i64, transactions::TransactionKind, &str, u32)] = &[
        (
            "Opening capital deposit",
            500_000,
            transactions::TransactionKind::Income,
            "capital",
            1,
        ),
        (
            "Bought inventory from supplier",
            150_000,
            transactions::TransactionKind::Purchase,
            "inventory",
            3,
        ),
        (
            "Cash sale of goods",
            220_000,
            transactions::TransactionKind::Sale,
            "cash",
            5,
        ),
        (
            "Office rent for the month",
            80_000,
            transactions::TransactionKind::Expense,
            "rent",
            7,
        ),
        (
            "Invoice to Acme Corp",
            175_000,
            transactions::TransactionKind::Sale,
            "accounts_receivable",
            10,
        ),
        (
            "Bought delivery scooter",
            120_000,
            transactions::TransactionKind::Purchase,
            "equipment",
            12,
        ),
        (
            "Bank transfer sale",
            95_000,
            transactions::TransactionKind::Sale,
            "bank",
            15,
        ),
        (
            "Electricity bill",
            12_500,
            transactions::TransactionKind::Expense,
            "utilities",
            18,
        ),
        (
            "Supplier invoice, due next month",
            60_000,
            transactions::TransactionKind::Expense,
            "accounts_payable",
            20,
        ),
        (
            "Working capital loan received",
            200_000,
            transactions::TransactionKind::Income,
            "loan",
            22,
        ),
        (
            "Restocked inventory",
            90_000,
            transactions::TransactionKind::Purchase,
            "inventory",
            25,
        ),
        (
            "Cash sale of goods",
            130_000,
            transactions::TransactionKind::Sale,
            "cash",
            28,
        ),
    ];

    for (description, cents, kind, category, day) in rows {
        let tx = transactions::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(demo_user_id()),
            description: Set((*description).to_string()),
            amount: Set(Decimal::new(*cents, 2)),
            kind: Set(*kind),
            category: Set((*category).to_string()),
            date: Set(NaiveDate::from_ymd_opt(2026, 5, *day).unwrap()),
            created_at: Set(Utc::now().into()),
        };

        tx.insert(db).await.expect("Failed to insert transaction");
    }

    println!("  Seeded {} transactions", rows.len());
}
