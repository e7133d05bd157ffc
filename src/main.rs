//! RESTful user-management API over MongoDB.
//!
//! Reads the store address from the `MONGO_URI` environment variable.

use std::sync::Arc;

use tracing::{error, info};

use mongo_user_api::application::UserService;
use mongo_user_api::{
    create_api_router, init_database, Config, DatabaseConfig, MongoUserRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("Starting user API...");

    // ── Database ───────────────────────────────────────────────
    // One client for the whole process; the driver's internal pooling
    // handles concurrent per-request use.
    let db_config = DatabaseConfig {
        uri: config.mongo_uri.clone(),
        ..DatabaseConfig::default()
    };

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize MongoDB client: {}", e);
            return Err(e.into());
        }
    };

    // ── Wiring ─────────────────────────────────────────────────
    let repo = Arc::new(MongoUserRepository::new(&db));
    let user_service = Arc::new(UserService::new(repo));
    let router = create_api_router(user_service);

    // ── Serve ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("REST API server listening on http://{}", config.address());
    info!("Swagger UI available at http://{}/docs/", config.address());

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("User API shutdown complete");
    Ok(())
}
