use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One violated rule on one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            msg: msg.into(),
        }
    }
}

/// Aggregated business-validation failure.
///
/// Rendered as a 403 with the individual [`FieldError`]s under
/// `details.validationErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}: {reason}")]
pub struct ValidationRejection {
    pub status: u16,
    pub message: String,
    pub reason: String,
    pub validation_errors: Vec<FieldError>,
}

impl ValidationRejection {
    pub const STATUS: u16 = 403;
    pub const MESSAGE: &'static str = "Validation Errors";
    pub const REASON: &'static str = "Somebody sent bad data";

    pub fn new(validation_errors: Vec<FieldError>) -> Self {
        Self {
            status: Self::STATUS,
            message: Self::MESSAGE.to_string(),
            reason: Self::REASON.to_string(),
            validation_errors,
        }
    }
}
