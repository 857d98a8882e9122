//! Storage plumbing shared by the domain crates: record lifecycle,
//! the in-memory store and the MongoDB connector.
//!
//! # Features
//!
//! - `mongodb` - MongoDB connector, config and health checks
//! - `config` - `core_config::FromEnv` for [`mongodb::MongoConfig`]
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "shop");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(&config.database);
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult, InMemoryCollection, Lifecycle, Record};
