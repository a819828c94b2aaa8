//! Hotel Reservations Service
//!
//! REST API for hotel room reservations with double-booking protection.
//! Reads configuration from a TOML file (override the path with
//! `RESERVATIONS_CONFIG`).

use std::sync::Arc;
use std::time::Instant;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use hotel_reservations::config::AppConfig;
use hotel_reservations::infrastructure::database::migrator::Migrator;
use hotel_reservations::{
    create_api_router, default_config_path, init_database, ApiState, DatabaseConfig,
    ReservationService, SeaOrmReservationRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("RESERVATIONS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Hotel Reservations Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Service wiring ─────────────────────────────────────────
    let repository = Arc::new(SeaOrmReservationRepository::new(db.clone()));
    let service = Arc::new(ReservationService::new(repository));

    let router = create_api_router(ApiState {
        service,
        db,
        started_at: Arc::new(Instant::now()),
    });

    // ── HTTP server ────────────────────────────────────────────
    let address = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("REST API listening on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
