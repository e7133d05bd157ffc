//! MongoDB connection setup

pub mod documents;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::{info, warn};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string (e.g., "mongodb://localhost:27017")
    pub uri: String,
    /// Database name
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "users_db".to_string(),
        }
    }
}

/// Initialize the MongoDB client and select the service database.
///
/// The driver connects lazily; the ping surfaces configuration problems
/// at startup without making them fatal — store errors are reported
/// per-request once traffic arrives.
pub async fn init_database(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    info!("Connecting to MongoDB: {}", config.uri);
    let client = Client::with_uri_str(&config.uri).await?;
    let db = client.database(&config.database);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!("MongoDB connection established"),
        Err(e) => warn!("MongoDB not reachable yet: {}", e),
    }

    Ok(db)
}
