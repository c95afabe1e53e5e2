//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

const CUSTOMERS: &[(&str, &str)] = &[
    ("Evil Rabbit", "evil@rabbit.com"),
    ("Delba de Oliveira", "delba@oliveira.com"),
    ("Lee Robinson", "lee@robinson.com"),
    ("Michael Novotny", "michael@novotny.com"),
    ("Amy Burns", "amy@burns.com"),
    ("Balazs Orban", "balazs@orban.com"),
];

/// (customer index, amount in cents, status, date)
const INVOICES: &[(usize, i32, &str, &str)] = &[
    (0, 15795, "pending", "2022-12-06"),
    (1, 20348, "pending", "2022-11-14"),
    (4, 3040, "paid", "2022-10-29"),
    (3, 44800, "paid", "2023-09-10"),
    (5, 34577, "pending", "2023-08-05"),
    (2, 54246, "pending", "2023-07-16"),
    (0, 666, "pending", "2023-06-27"),
    (3, 32545, "paid", "2023-06-09"),
    (4, 1250, "paid", "2023-06-17"),
    (5, 8546, "paid", "2023-06-07"),
    (1, 500, "paid", "2023-08-19"),
    (5, 8945, "paid", "2023-06-03"),
    (2, 1000, "paid", "2022-06-05"),
];

const REVENUE: &[(&str, i32)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Dashboard Seed Script ===");

    let customer_ids = seed_customers(&pool).await?;
    seed_invoices(&pool, &customer_ids).await?;
    seed_revenue(&pool).await?;

    println!("\n=== Seed complete! ===");

    pool.close().await;
    Ok(())
}

async fn seed_customers(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let mut ids = Vec::with_capacity(CUSTOMERS.len());

    for (name, email) in CUSTOMERS {
        let slug = name.to_lowercase().replace(' ', "-");
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO customers (name, email, image_url)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(format!("/customers/{slug}.png"))
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    println!("[done] Upserted {} customers", ids.len());
    Ok(ids)
}

async fn seed_invoices(pool: &PgPool, customer_ids: &[Uuid]) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] {count} invoices already exist");
        return Ok(());
    }

    for (customer, amount, status, date) in INVOICES {
        let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date)
             VALUES ($1, $2, $3::invoice_status, $4)",
        )
        .bind(customer_ids[*customer])
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} invoices", INVOICES.len());
    Ok(())
}

async fn seed_revenue(pool: &PgPool) -> anyhow::Result<()> {
    for (period, amount) in REVENUE {
        sqlx::query(
            "INSERT INTO revenue (period, amount) VALUES ($1, $2)
             ON CONFLICT (period) DO NOTHING",
        )
        .bind(period)
        .bind(amount)
        .execute(pool)
        .await?;
    }

    println!("[done] Seeded {} revenue periods", REVENUE.len());
    Ok(())
}
