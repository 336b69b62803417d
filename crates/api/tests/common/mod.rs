#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{Days, NaiveDate};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hotelrooms_api::config::ServerConfig;
use hotelrooms_api::router::build_app_router;
use hotelrooms_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// `today + days`, as the `YYYY-MM-DD` string the API expects.
pub fn days_from_today(days: i64) -> String {
    let today = hotelrooms_core::reservations::today();
    let date: NaiveDate = if days >= 0 {
        today.checked_add_days(Days::new(days as u64)).unwrap()
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
    };
    date.to_string()
}

/// Create a room through the API and assert it succeeded.
pub async fn create_room(pool: &PgPool, room_number: &str, day_price: i32) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/rooms",
        serde_json::json!({
            "room_number": room_number,
            "description": "Luxury Suite",
            "day_price": day_price,
        }),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "room {room_number} should be created"
    );
}

/// Book a room through the API and return the new reservation id.
pub async fn create_reservation(
    pool: &PgPool,
    room_number: &str,
    start: i64,
    end: i64,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/reservations",
        serde_json::json!({
            "room_number": room_number,
            "date_start": days_from_today(start),
            "date_end": days_from_today(end),
        }),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "reservation should be created"
    );
    body_json(response).await["id"].as_i64().unwrap()
}
