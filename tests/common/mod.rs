use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use lingolab::{
    AppState,
    config::AppConfig,
    create_app,
    data::{DbPool, establish_pool},
    features::srs::FixedClock,
};

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

pub fn test_pool() -> DbPool {
    establish_pool(":memory:").unwrap()
}

/// App over the given database with a frozen clock
pub fn app_at(pool: DbPool, now: DateTime<Utc>) -> Router {
    create_app(AppState::with_clock(
        pool,
        AppConfig::default(),
        Arc::new(FixedClock(now)),
    ))
}

pub fn create_test_app(now: DateTime<Utc>) -> Router {
    app_at(test_pool(), now)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn add_word(app: &Router, id: &str, language_id: &str, difficulty: i32) {
    let (status, _) = send(
        app,
        post_json(
            "/api/v1/words",
            serde_json::json!({
                "id": id,
                "languageId": language_id,
                "text": id,
                "translation": "",
                "difficulty": difficulty,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
