//! Database migration runner for Duoledger.
//!
//! Reads the `database` section of the application configuration
//! (`DUOLEDGER__DATABASE__URL`, config files). Usage:
//!   migrator up      - Run all pending migrations (default)
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use anyhow::{Context, bail};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use duoledger_db::{connect, migration::Migrator};
use duoledger_shared::config::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duoledger=info,sea_orm_migration=info".into()),
        )
        .init();

    let config = DatabaseConfig::load().context("Failed to load configuration")?;
    let url = config
        .url
        .as_deref()
        .context("database.url is not configured (DUOLEDGER__DATABASE__URL)")?;
    let db = connect(url, &config).await?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    match command.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, Some(1)).await?,
        "status" => Migrator::status(&db).await?,
        "fresh" => Migrator::fresh(&db).await?,
        other => bail!("Unknown command '{other}', expected up, down, status or fresh"),
    }

    info!(command = %command, "Migration command finished");
    Ok(())
}
