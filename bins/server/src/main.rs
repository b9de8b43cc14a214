//! Duoledger API Server
//!
//! Main entry point for the Duoledger backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duoledger_api::{AppState, create_router};
use duoledger_core::ledger::LedgerService;
use duoledger_core::store::LedgerStore;
use duoledger_db::{InMemoryLedgerStore, PgLedgerStore, connect};
use duoledger_shared::{AccessGate, AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duoledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Pick the record store
    let store: Arc<dyn LedgerStore> = match &config.database.url {
        Some(url) => {
            let db = connect(url, &config.database).await?;
            info!("Connected to database");
            Arc::new(PgLedgerStore::new(db))
        }
        None => {
            warn!("No database configured, records are kept in memory and lost on restart");
            Arc::new(InMemoryLedgerStore::new())
        }
    };

    let ledger = LedgerService::new(store);
    ledger
        .initialize()
        .await
        .context("Failed to initialize record store")?;

    let jwt_service = JwtService::new(JwtConfig::from(&config.auth));

    let access_gate = AccessGate::new(&config.auth.authorized_users);
    if config.auth.authorized_users.is_empty() {
        warn!("auth.authorized_users is empty, every protected request will be rejected");
    }

    let state = AppState {
        ledger: Arc::new(ledger),
        jwt_service: Arc::new(jwt_service),
        access_gate: Arc::new(access_gate),
    };

    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
