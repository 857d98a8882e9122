//! Handler tests for the Orders API, wired to in-memory user and product stores

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_orders::{InMemoryOrderRepository, OrderUseCases, handlers};
use domain_products::{
    GetProductById, InMemoryProductRepository, Meta, NewProduct, ProductRepository,
};
use domain_users::{GetUserById, InMemoryUserRepository, NewUser, UserRepository};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    router: Router,
    users: Arc<InMemoryUserRepository>,
    products: Arc<InMemoryProductRepository>,
}

impl TestApp {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let products = Arc::new(InMemoryProductRepository::new());
        let orders = Arc::new(InMemoryOrderRepository::new());

        let use_cases = OrderUseCases::new(
            orders,
            GetUserById::new(Arc::clone(&users)),
            GetProductById::new(Arc::clone(&products)),
        );

        Self {
            router: Router::new().nest("/orders", handlers::router(use_cases)),
            users,
            products,
        }
    }

    async fn user(&self) -> Uuid {
        let input: NewUser = serde_json::from_value(json!({ "name": "Barbara" })).unwrap();
        self.users.add(input).await.unwrap().id
    }

    async fn product(&self, name: &str) -> Uuid {
        let input = NewProduct {
            name: name.to_string(),
            description: String::new(),
            images: vec![],
            price: 5.0,
            color: String::new(),
            meta: Meta::new(),
        };
        self.products.add(input).await.unwrap().id
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

#[tokio::test]
async fn test_place_order() {
    let app = TestApp::new();
    let user = app.user().await;
    let products = vec![
        app.product("P1").await,
        app.product("P2").await,
        app.product("P3").await,
    ];

    let (status, body) = app
        .send(
            "POST",
            "/orders",
            Some(json!({ "userId": user, "productsIds": products, "isPayed": false })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], true);
    assert_eq!(body["content"]["userId"], user.to_string());
    assert_eq!(body["content"]["productsIds"], json!(products));
    assert_eq!(body["content"]["isPayed"], false);
    assert!(body["content"]["date"].is_string());

    let id = body["content"]["id"].as_str().unwrap();
    let (status, fetched) = app.send("GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["content"], body["content"]);
}

#[tokio::test]
async fn test_order_with_unknown_references_is_403() {
    let app = TestApp::new();
    let (user, product) = (Uuid::now_v7(), Uuid::now_v7());

    let (status, body) = app
        .send(
            "POST",
            "/orders",
            Some(json!({ "userId": user, "productsIds": [product] })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "REQUEST_REJECTED");
    assert_eq!(body["message"], "Validation Errors");
    assert_eq!(body["details"]["reason"], "Somebody sent bad data");
    assert_eq!(
        body["details"]["validationErrors"],
        json!([
            { "field": "productsIds", "msg": format!("No products with ids {product}") },
            { "field": "userId", "msg": format!("No user with id {user}") }
        ])
    );
}

#[tokio::test]
async fn test_rejected_order_is_not_stored() {
    let app = TestApp::new();
    let user = app.user().await;

    let (status, body) = app
        .send(
            "POST",
            "/orders",
            Some(json!({ "userId": user, "productsIds": [Uuid::now_v7()] })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["details"]["validationErrors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_order() {
    let app = TestApp::new();
    let user = app.user().await;
    let product = app.product("Pen").await;

    let (_, created) = app
        .send(
            "POST",
            "/orders",
            Some(json!({ "userId": user, "productsIds": [product] })),
        )
        .await;
    let id = created["content"]["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/orders/{id}"),
            Some(json!({
                "userId": user,
                "productsIds": [product, product],
                "isPayed": true,
                "date": "2024-05-01T12:00:00Z"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["content"]["isPayed"], true);
    assert_eq!(updated["content"]["productsIds"].as_array().unwrap().len(), 2);

    let (status, _) = app.send("DELETE", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send("GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_without_date_keeps_stored_order() {
    let app = TestApp::new();
    let user = app.user().await;

    let (_, created) = app
        .send(
            "POST",
            "/orders",
            Some(json!({ "userId": user, "date": "2024-05-01T12:00:00Z" })),
        )
        .await;
    let id = created["content"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(
            "PUT",
            &format!("/orders/{id}"),
            Some(json!({ "userId": user, "isPayed": true })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "JSON_EXTRACTION");

    let (status, fetched) = app.send("GET", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["content"]["date"], created["content"]["date"]);
    assert_eq!(fetched["content"]["isPayed"], false);
}

#[tokio::test]
async fn test_malformed_order_id_is_400() {
    let (status, _) = TestApp::new().send("GET", "/orders/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
