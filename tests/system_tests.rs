//! Integration tests for the unauthenticated system endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use kivor::config::Config;
use kivor::db::Store;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn connect() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt)
        .await
        .expect("Failed to open in-memory database")
}

fn app_with(conn: DatabaseConnection) -> Router {
    let mut config = Config::default();
    config.database.url = "sqlite::memory:".to_string();
    config.auth.secret_key = "system-test-secret".to_string();

    let store = Store::from_connection(conn, std::time::Duration::from_secs(5));
    kivor::api::router(kivor::api::create_app_state(config, store))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_root() {
    let app = app_with(connect().await);

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "service": "kivor-backend"}));
}

#[tokio::test]
async fn test_health() {
    let app = app_with(connect().await);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"healthy": true}));
}

#[tokio::test]
async fn test_db_check() {
    let app = app_with(connect().await);

    let (status, body) = get(&app, "/test-db").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"db_connection": "ok", "result": 1}));
}

#[tokio::test]
async fn test_db_check_reports_database_error() {
    let conn = connect().await;
    let app = app_with(conn.clone());
    conn.close().await.expect("close pool");

    let (status, body) = get(&app, "/test-db").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app_with(connect().await);

    let (status, body) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = app_with(connect().await);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-42");

    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
