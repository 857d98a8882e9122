//! Shop API - REST server for users, products and orders

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(storage = %config.storage, "Starting Shop API");

    let state = AppState::connect(config).await?;

    api::init_indexes(&state).await?;

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.api_prefix,
        &state.config.environment,
    )?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Serving API under {} on port {}",
        state.config.api_prefix, state.config.server.port
    );

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        if let Storage::Mongo { client, .. } = state.storage {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
