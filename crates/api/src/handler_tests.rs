//! Router tests driven through `tower::ServiceExt::oneshot` against an
//! in-memory database.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{router, AppState};

async fn app() -> Router {
    let pool = db::pool::create_memory_pool().await.unwrap();
    db::pool::init_schema(&pool, &db::default_registry().unwrap())
        .await
        .unwrap();
    router(AppState { pool })
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, description: &str, amount: f64) -> Value {
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/transactions",
            json!({ "description": description, "amount": amount }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn list_is_empty_initially() {
    let app = app().await;
    let resp = app
        .oneshot(empty_request(Method::GET, "/transactions"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn create_then_list_and_get() {
    let app = app().await;
    let created = create(&app, "lunch", 12.5).await;
    assert_eq!(created["description"], "lunch");
    assert_eq!(created["amount"], 12.5);
    let id = created["id"].as_i64().expect("numeric id");

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/transactions"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!([created.clone()]));

    let resp = app
        .oneshot(empty_request(Method::GET, &format!("/transactions/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn list_filters_by_description() {
    let app = app().await;
    create(&app, "fuel", 40.0).await;
    let books = create(&app, "books", 22.0).await;

    let resp = app
        .oneshot(empty_request(Method::GET, "/transactions?description=books"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([books]));
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = app().await;
    let resp = app
        .oneshot(empty_request(Method::GET, "/transactions/42"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["message"].is_string());
}

#[tokio::test]
async fn create_with_missing_amount_is_rejected() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/transactions",
            json!({ "description": "no amount" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(resp).await["message"].is_string());

    let resp = app
        .oneshot(empty_request(Method::GET, "/transactions"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn create_with_non_json_body_reports_message() {
    let app = app().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/transactions")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
}

#[tokio::test]
async fn put_updates_existing_transaction() {
    let app = app().await;
    let created = create(&app, "typo", 1.0).await;
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/transactions/{id}"),
            json!({ "description": "fixed", "amount": 2.25 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "id": id, "description": "fixed", "amount": 2.25 })
    );
}

#[tokio::test]
async fn put_with_missing_amount_is_rejected_and_row_unchanged() {
    let app = app().await;
    let created = create(&app, "keep", 4.5).await;
    let uri = format!("/transactions/{}", created["id"]);

    let resp = app
        .clone()
        .oneshot(json_request(Method::PUT, &uri, json!({ "description": "x" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(resp).await["message"].is_string());

    let resp = app
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn put_unknown_id_returns_404() {
    let app = app().await;
    let resp = app
        .oneshot(json_request(
            Method::PUT,
            "/transactions/3",
            json!({ "description": "x", "amount": 1.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = app().await;
    let created = create(&app, "temp", 9.0).await;
    let uri = format!("/transactions/{}", created["id"]);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let app = app().await;
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/transactions")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
