//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use serde_json::Value;

use crate::state::{AppState, Storage};

/// 200 when the storage backend answers, 503 otherwise
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Storage::Mongo { client, .. } = &state.storage {
        checks.push((
            "mongodb",
            Box::pin(async move {
                let status = check_health_detailed(client).await;
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
                }
            }),
        ));
    }

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
