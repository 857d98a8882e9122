//! Success envelope shared by every API handler.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"status": true, "content": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub status: bool,
    pub content: T,
}

impl<T> Envelope<T> {
    pub fn ok(content: T) -> Self {
        Self {
            status: true,
            content,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
