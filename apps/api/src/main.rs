mod config;
mod content;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::content::seed::{ensure_seeded, SeedOutcome};
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{ContentStore, MemoryContentStore, PgContentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config).await?;

    // Seed once, before the listener binds
    if config.seed_on_startup {
        match ensure_seeded(store.as_ref())
            .await
            .context("Seeding the content store failed")?
        {
            SeedOutcome::Seeded(_) => info!("Content store seeded"),
            SeedOutcome::AlreadySeeded { .. } => info!("Content store already seeded"),
        }
    } else {
        info!("SEED_ON_STARTUP=false, skipping seed");
    }

    let counts = store
        .counts()
        .await
        .context("Failed to read content counts")?;
    info!(
        "Serving {} profile(s), {} experiences, {} skills, {} projects, {} education, {} achievements",
        counts.profiles,
        counts.experiences,
        counts.skills,
        counts.projects,
        counts.education,
        counts.achievements
    );

    let state = AppState {
        store,
        config: config.clone(),
    };

    // Read-only public API consumed by the mobile client
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the configured store. Postgres also gets its schema migrated here.
async fn open_store(config: &Config) -> Result<Arc<dyn ContentStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store")?;
            let pool = create_pool(url, config.db_max_connections).await?;
            run_migrations(&pool)
                .await
                .context("Failed to apply database migrations")?;
            Ok(Arc::new(PgContentStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory content store; content is rebuilt on every start");
            Ok(Arc::new(MemoryContentStore::new()))
        }
    }
}
