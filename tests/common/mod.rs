// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use mapty_tracker::config::Config;
use mapty_tracker::models::Coordinates;
use mapty_tracker::routes::create_router;
use mapty_tracker::services::GeolocationError;
use mapty_tracker::session::{Session, SessionSettings};
use mapty_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Position used by test sessions.
#[allow(dead_code)]
pub const HOME: Coordinates = Coordinates {
    lat: 38.7223,
    lng: -9.1393,
};

/// Create a test app whose map is centered on [`HOME`].
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(Ok(HOME))
}

/// Create a test app whose startup geolocation failed.
#[allow(dead_code)]
pub fn create_test_app_without_map() -> (axum::Router, Arc<AppState>) {
    build_app(Err(GeolocationError::Unavailable))
}

fn build_app(position: Result<Coordinates, GeolocationError>) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let session = Session::start(SessionSettings::from(&config), position);
    let state = Arc::new(AppState::new(config, session));
    (create_router(state.clone()), state)
}

/// POST a JSON UI event.
#[allow(dead_code)]
pub async fn post_event(app: &axum::Router, event: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/events")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(event.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a path.
#[allow(dead_code)]
pub async fn get(app: &axum::Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text.
#[allow(dead_code)]
pub async fn text_body(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Click the map at `at` and submit a running workout.
#[allow(dead_code)]
pub async fn log_run(
    app: &axum::Router,
    at: Coordinates,
    distance: &str,
    duration: &str,
    cadence: &str,
) -> Value {
    post_event(
        app,
        serde_json::json!({ "event": "map_click", "at": { "lat": at.lat, "lng": at.lng } }),
    )
    .await;
    let response = post_event(
        app,
        serde_json::json!({
            "event": "submit",
            "form": {
                "type": "running",
                "distance": distance,
                "duration": duration,
                "cadence": cadence
            }
        }),
    )
    .await;
    json_body(response).await
}
