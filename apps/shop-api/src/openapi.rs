//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Shop API
///
/// Paths assume the default `/api` prefix.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Users, products and orders"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/users", api = domain_users::ApiDoc),
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/orders", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Orders", description = "Order endpoints")
    )
)]
pub struct ApiDoc;
