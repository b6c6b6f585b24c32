use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Connects to PostgreSQL and applies pending migrations.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - MIGRATIONS_PATH: migrations directory (default: "infrastructure/persistence/migrations")
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url))
        .await
        .context("could not connect to the database")?;
    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("could not apply migrations from {}", migrations_path))?;

    Ok(pool)
}
