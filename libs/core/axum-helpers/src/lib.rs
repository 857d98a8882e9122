//! # Axum Helpers
//!
//! Shared building blocks for the HTTP API.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: [`AppError`] and the common error body
//! - **[`extractors`]**: [`UuidPath`], [`ValidatedJson`]
//! - **[`response`]**: the [`Envelope`] success wrapper

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse, FieldError, ValidationRejection};

pub use extractors::{UuidPath, ValidatedJson};

pub use response::Envelope;
