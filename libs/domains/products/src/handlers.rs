//! HTTP handlers for Products API

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

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;
use crate::use_cases::ProductUseCases;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_product, update_product, delete_product),
    components(
        schemas(Product, NewProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(use_cases: ProductUseCases<R>) -> Router {
    let shared = Arc::new(use_cases);

    Router::new()
        .route("/", post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared)
}

#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Envelope<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(use_cases): State<Arc<ProductUseCases<R>>>,
    ValidatedJson(input): ValidatedJson<NewProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = use_cases.add.execute(input).await?;
    Ok((StatusCode::CREATED, Envelope::ok(product)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Envelope<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(use_cases): State<Arc<ProductUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Envelope<Product>> {
    let product = use_cases
        .get_by_id
        .execute(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Envelope::ok(product))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product updated", body = Envelope<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(use_cases): State<Arc<ProductUseCases<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<NewProduct>,
) -> ProductResult<Envelope<Product>> {
    let product = use_cases
        .update
        .execute(Product::with_id(id, input))
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Envelope::ok(product))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = Envelope<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(use_cases): State<Arc<ProductUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Envelope<Product>> {
    let product = use_cases
        .delete
        .execute(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Envelope::ok(product))
}
