//! API routes module

pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use axum::Router;
use domain_orders::{InMemoryOrderRepository, MongoOrderRepository, OrderRepository};
use domain_products::{InMemoryProductRepository, MongoProductRepository, ProductRepository};
use domain_users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use std::sync::Arc;

use crate::state::{AppState, Storage};

/// Create all API routes on the configured storage
pub fn routes(state: &AppState) -> Router {
    let domains = match &state.storage {
        Storage::Memory => wire(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
        ),
        Storage::Mongo { db, .. } => wire(
            Arc::new(MongoUserRepository::new(db)),
            Arc::new(MongoProductRepository::new(db)),
            Arc::new(MongoOrderRepository::new(db)),
        ),
    };

    domains.merge(health::router(state.clone()))
}

/// Repositories → use cases → routers. Orders share the user and product
/// repositories so new orders see the same records the other routes serve.
fn wire<U, P, O>(users: Arc<U>, products: Arc<P>, orders: Arc<O>) -> Router
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    Router::new()
        .nest("/users", users::router(Arc::clone(&users)))
        .nest("/products", products::router(Arc::clone(&products)))
        .nest("/orders", orders::router(orders, users, products))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    if let Storage::Mongo { db, .. } = &state.storage {
        users::init_indexes(db).await?;
        products::init_indexes(db).await?;
        orders::init_indexes(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StorageBackend};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                api_prefix: "/api".to_string(),
                storage: StorageBackend::Memory,
                mongodb: None,
            },
            storage: Storage::Memory,
        }
    }

    async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_orders_see_users_and_products_created_over_http() {
        let router = routes(&memory_state());

        let (status, user) = post(&router, "/users", json!({ "name": "Edsger" })).await;
        assert_eq!(status, StatusCode::CREATED);

        let mut products = Vec::new();
        for name in ["P1", "P2", "P3"] {
            let (status, product) =
                post(&router, "/products", json!({ "name": name, "price": 2.5 })).await;
            assert_eq!(status, StatusCode::CREATED);
            products.push(product["content"]["id"].clone());
        }

        let (status, order) = post(
            &router,
            "/orders",
            json!({
                "userId": user["content"]["id"],
                "productsIds": products,
                "isPayed": false
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(order["content"]["userId"], user["content"]["id"]);
        assert_eq!(order["content"]["productsIds"], json!(products));
    }

    #[tokio::test]
    async fn test_order_for_unknown_user_is_forbidden() {
        let router = routes(&memory_state());
        let (_, product) = post(&router, "/products", json!({ "name": "Pen", "price": 1 })).await;

        let (status, body) = post(
            &router,
            "/orders",
            json!({
                "userId": "0190a0a0-0000-7000-8000-000000000000",
                "productsIds": [product["content"]["id"]]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["details"]["validationErrors"][0]["field"], "userId");
    }

    #[tokio::test]
    async fn test_ready_with_memory_storage() {
        let response = routes(&memory_state())
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_init_indexes_skipped_for_memory() {
        assert!(init_indexes(&memory_state()).await.is_ok());
    }
}
