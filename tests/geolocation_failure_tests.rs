// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Behavior when the startup position could not be resolved.
//!
//! The map never loads; every map-dependent event must be a silent no-op
//! rather than an error.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{get, json_body, post_event};

#[tokio::test]
async fn test_startup_alert_and_no_map() {
    let (app, _state) = common::create_test_app_without_map();

    let snapshot = json_body(get(&app, "/api/session").await).await;
    assert!(snapshot["map"].is_null());
    assert_eq!(
        snapshot["startup"]["commands"],
        json!([{ "command": "alert", "message": "Could not get your position" }])
    );
}

#[tokio::test]
async fn test_map_dependent_events_are_noops() {
    let (app, state) = common::create_test_app_without_map();

    let events = [
        json!({ "event": "map_click", "at": { "lat": 10.0, "lng": 10.0 } }),
        json!({
            "event": "submit",
            "form": { "type": "running", "distance": "5", "duration": "25", "cadence": "180" }
        }),
        json!({ "event": "select", "id": "1234567890" }),
    ];

    for event in events {
        let response = post_event(&app, event).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["commands"], json!([]));
    }

    let session = state.session.lock().await;
    assert!(session.workouts().is_empty());
    assert!(!session.form().is_shown());
}

#[tokio::test]
async fn test_kind_toggle_still_works() {
    let (app, _state) = common::create_test_app_without_map();

    let event = json!({ "event": "kind_change", "kind": "cycling" });
    let update = json_body(post_event(&app, event).await).await;
    assert_eq!(
        update["commands"],
        json!([{ "command": "toggle_kind_fields", "kind": "cycling" }])
    );
}
