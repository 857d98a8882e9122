//! MongoDB connection management

mod config;
mod connector;
mod health;
mod ids;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use ids::{bson_uuid, bson_uuids, uuid_from_bson, uuids_from_bson};

pub use mongodb::{Client, Collection, Database};
