//! HTTP handlers for the Users API

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    Envelope, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;
use crate::use_cases::UserUseCases;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user, update_user, delete_user),
    components(
        schemas(User, NewUser),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Users router, meant to be nested under `/users`
pub fn router<R: UserRepository + 'static>(use_cases: UserUseCases<R>) -> Router {
    let shared = Arc::new(use_cases);

    Router::new()
        .route("/", post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(shared)
}

/// Create a user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = Envelope<User>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    ValidatedJson(input): ValidatedJson<NewUser>,
) -> UserResult<impl IntoResponse> {
    let user = use_cases.add.execute(input).await?;
    Ok((StatusCode::CREATED, Envelope::ok(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(("id" = uuid::Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = Envelope<User>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Envelope<User>> {
    let user = use_cases
        .get_by_id
        .execute(id)
        .await?
        .ok_or(UserError::NotFound(id))?;
    Ok(Envelope::ok(user))
}

/// Replace a user's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(("id" = uuid::Uuid, Path, description = "User ID")),
    request_body = NewUser,
    responses(
        (status = 200, description = "User updated", body = Envelope<User>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<NewUser>,
) -> UserResult<Envelope<User>> {
    let user = use_cases
        .update
        .execute(User::with_id(id, input))
        .await?
        .ok_or(UserError::NotFound(id))?;
    Ok(Envelope::ok(user))
}

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(("id" = uuid::Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted, returned as marked", body = Envelope<User>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Envelope<User>> {
    let user = use_cases
        .delete
        .execute(id)
        .await?
        .ok_or(UserError::NotFound(id))?;
    Ok(Envelope::ok(user))
}
