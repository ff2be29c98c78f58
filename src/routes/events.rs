// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI event route: the single entry point for page interactions.

use crate::error::{AppError, Result};
use crate::services::ViewUpdate;
use crate::session::UiEvent;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

/// Event routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/events", post(handle_event))
}

/// Apply one UI event to the session and return the resulting render
/// commands.
///
/// Validation failures and selection misses are not HTTP errors: they come
/// back as an alert command or an empty command list. Only malformed
/// payloads are rejected.
async fn handle_event(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<UiEvent>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<ViewUpdate>> {
    let Json(event) = payload?;
    validate_event(&event)?;

    let mut session = state.session.lock().await;
    let update = session.dispatch(event, chrono::Utc::now());
    Ok(Json(update))
}

fn validate_event(event: &UiEvent) -> Result<()> {
    if let UiEvent::MapClick { at } = event {
        if !at.is_valid() {
            return Err(AppError::BadRequest(format!(
                "Coordinates out of range: lat={}, lng={}",
                at.lat, at.lng
            )));
        }
    }
    Ok(())
}
