//! HTTP handlers for the Orders API

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
        NotFoundResponse, RejectedResponse,
    },
};
use domain_products::ProductRepository;
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{OrderError, OrderResult};
use crate::models::{NewOrder, Order, ReplaceOrder};
use crate::repository::OrderRepository;
use crate::use_cases::OrderUseCases;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order, get_order, update_order, delete_order),
    components(
        schemas(Order, NewOrder, ReplaceOrder),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            RejectedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Order endpoints")
    )
)]
pub struct ApiDoc;

type SharedUseCases<O, U, P> = Arc<OrderUseCases<O, U, P>>;

/// Orders router, meant to be nested under `/orders`
pub fn router<O, U, P>(use_cases: OrderUseCases<O, U, P>) -> Router
where
    O: OrderRepository + 'static,
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", post(create_order))
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(Arc::new(use_cases))
}

/// Place an order
///
/// Refused with 403 when the user or any product does not exist.
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Order created", body = Envelope<Order>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = RejectedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<O, U, P>(
    State(use_cases): State<SharedUseCases<O, U, P>>,
    ValidatedJson(input): ValidatedJson<NewOrder>,
) -> OrderResult<impl IntoResponse>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    let order = use_cases.add.execute(input).await?;
    Ok((StatusCode::CREATED, Envelope::ok(order)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Orders",
    params(("id" = uuid::Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = Envelope<Order>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order<O, U, P>(
    State(use_cases): State<SharedUseCases<O, U, P>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Envelope<Order>>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    let order = use_cases
        .get_by_id
        .execute(id)
        .await?
        .ok_or(OrderError::NotFound(id))?;
    Ok(Envelope::ok(order))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Orders",
    params(("id" = uuid::Uuid, Path, description = "Order ID")),
    request_body = ReplaceOrder,
    responses(
        (status = 200, description = "Order updated", body = Envelope<Order>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order<O, U, P>(
    State(use_cases): State<SharedUseCases<O, U, P>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ReplaceOrder>,
) -> OrderResult<Envelope<Order>>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    let order = use_cases
        .update
        .execute(Order::with_id(id, input.into()))
        .await?
        .ok_or(OrderError::NotFound(id))?;
    Ok(Envelope::ok(order))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Orders",
    params(("id" = uuid::Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = Envelope<Order>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_order<O, U, P>(
    State(use_cases): State<SharedUseCases<O, U, P>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Envelope<Order>>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    let order = use_cases
        .delete
        .execute(id)
        .await?
        .ok_or(OrderError::NotFound(id))?;
    Ok(Envelope::ok(order))
}
