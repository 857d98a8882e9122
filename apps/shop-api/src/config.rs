//! Configuration for the Shop API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_parse, server::ServerConfig};
use database::mongodb::MongoConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where records are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    /// Process-local; everything is lost on restart
    Memory,
    MongoDb,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Mount point of the API routes, always starting with `/`
    pub api_prefix: String,
    pub storage: StorageBackend,
    /// Present exactly when `storage` is [`StorageBackend::MongoDb`]
    pub mongodb: Option<MongoConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let api_prefix = api_prefix_from_env()?;
        let storage = env_parse("STORAGE_BACKEND", StorageBackend::MongoDb)?;

        let mongodb = match storage {
            StorageBackend::MongoDb => Some(MongoConfig::from_env()?),
            StorageBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            api_prefix,
            storage,
            mongodb,
        })
    }
}

fn api_prefix_from_env() -> Result<String, ConfigError> {
    let prefix = env_or_default("API_PREFIX", "/api");
    if !prefix.starts_with('/') {
        return Err(ConfigError::ParseError {
            key: "API_PREFIX".to_string(),
            details: format!("'{prefix}' must start with '/'"),
        });
    }
    Ok(prefix)
}
