//! Application state management

use mongodb::{Client, Database};

use crate::config::Config;

/// The storage the repositories are built on
#[derive(Clone)]
pub enum Storage {
    Memory,
    Mongo { client: Client, db: Database },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
}

impl AppState {
    /// Connect to the configured backend. MongoDB connections are retried
    /// with exponential backoff.
    pub async fn connect(config: Config) -> eyre::Result<Self> {
        let storage = match &config.mongodb {
            Some(mongo) => {
                tracing::info!("Connecting to MongoDB at {}", mongo.redacted_url());
                let client =
                    database::mongodb::connect_from_config_with_retry(mongo, None).await?;
                let db = client.database(&mongo.database);
                tracing::info!("Successfully connected to MongoDB database: {}", mongo.database);
                Storage::Mongo { client, db }
            }
            None => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Storage::Memory
            }
        };

        Ok(Self { config, storage })
    }
}
