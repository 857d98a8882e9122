use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ValidationRejection};
use domain_products::ProductError;
use domain_users::UserError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),

    /// The order referenced records that do not exist
    #[error(transparent)]
    Rejected(#[from] ValidationRejection),

    #[error(transparent)]
    Users(#[from] UserError),

    #[error(transparent)]
    Products(#[from] ProductError),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => AppError::NotFound(format!("Order {} not found", id)),
            OrderError::Database(msg) => AppError::Database(msg),
            OrderError::Rejected(rejection) => AppError::Rejected(rejection),
            OrderError::Users(err) => err.into(),
            OrderError::Products(err) => err.into(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for OrderError {
    fn from(err: mongodb::error::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for OrderError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}
