//! Handler tests for the Users API over the in-memory repository

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_users::{InMemoryUserRepository, NewUser, UserRepository, UserUseCases, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

fn app(repository: Arc<InMemoryUserRepository>) -> Router {
    Router::new().nest("/users", handlers::router(UserUseCases::new(repository)))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seed(repository: &InMemoryUserRepository) -> Uuid {
    let input: NewUser = serde_json::from_value(json!({
        "name": "Ada",
        "lastName": "Lovelace",
        "gender": 1,
        "meta": { "hair": "brown" }
    }))
    .unwrap();
    repository.add(input).await.unwrap().id
}

#[tokio::test]
async fn test_create_user_wraps_envelope() {
    let repository = Arc::new(InMemoryUserRepository::new());

    let response = app(repository.clone())
        .oneshot(json_request(
            "POST",
            "/users",
            json!({ "name": "Grace", "lastName": "Hopper", "gender": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["content"]["name"], "Grace");
    assert_eq!(body["content"]["lastName"], "Hopper");
    assert_eq!(body["content"]["gender"], 1);

    let id: Uuid = serde_json::from_value(body["content"]["id"].clone()).unwrap();
    assert!(repository.get_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_user_rejects_unknown_gender() {
    let response = app(Arc::new(InMemoryUserRepository::new()))
        .oneshot(json_request(
            "POST",
            "/users",
            json!({ "name": "Grace", "gender": 7 }),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_create_user_validates_name() {
    let response = app(Arc::new(InMemoryUserRepository::new()))
        .oneshot(json_request("POST", "/users", json!({ "name": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_get_user() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let id = seed(&repository).await;

    let response = app(repository)
        .oneshot(empty_request("GET", &format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], true);
    assert_eq!(body["content"]["id"], id.to_string());
    assert_eq!(body["content"]["meta"]["hair"], "brown");
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let response = app(Arc::new(InMemoryUserRepository::new()))
        .oneshot(empty_request("GET", &format!("/users/{}", Uuid::now_v7())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_malformed_id_is_400() {
    let response = app(Arc::new(InMemoryUserRepository::new()))
        .oneshot(empty_request("GET", "/users/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "INVALID_UUID");
}

#[tokio::test]
async fn test_update_user() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let id = seed(&repository).await;

    let response = app(repository.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/users/{id}"),
            json!({ "name": "Augusta", "lastName": "King", "gender": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["content"]["id"], id.to_string());
    assert_eq!(body["content"]["name"], "Augusta");
    assert_eq!(body["content"]["gender"], 0);
    assert!(body["content"]["updatedAt"].is_string());

    let stored = repository.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.last_name, "King");
}

#[tokio::test]
async fn test_update_unknown_user_is_404() {
    let response = app(Arc::new(InMemoryUserRepository::new()))
        .oneshot(json_request(
            "PUT",
            &format!("/users/{}", Uuid::now_v7()),
            json!({ "name": "Nobody" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_then_get_is_404() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let id = seed(&repository).await;
    let app = app(repository);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["content"]["id"], id.to_string());
    assert_eq!(body["content"]["lifecycle"]["state"], "deleted");

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/users/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
