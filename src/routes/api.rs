// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only API routes over the session state.

use crate::error::{AppError, Result};
use crate::models::{FormState, Workout, WorkoutId};
use crate::services::view::{markers_geojson, render_workouts};
use crate::services::ViewUpdate;
use crate::session::MapView;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use geojson::FeatureCollection;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Identifiers are ten decimal digits; anything much longer is not ours.
const MAX_ID_LEN: usize = 32;

/// Snapshot routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/workouts", get(get_workouts))
        .route("/api/workouts/list", get(get_workout_list))
        .route("/api/workouts/{id}", get(get_workout))
        .route("/api/markers", get(get_markers))
}

// ─── Session ─────────────────────────────────────────────────

/// Session snapshot, used by the page on (re)load.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    /// Null when geolocation failed
    pub map: Option<MapView>,
    pub form: FormState,
    /// Commands produced at startup (map load or alert)
    pub startup: ViewUpdate,
    pub workout_count: u32,
    /// Creation time of the most recent workout (RFC3339)
    pub last_logged_at: Option<String>,
}

async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    let workouts = session.workouts();

    Json(SessionResponse {
        map: session.map().cloned(),
        form: session.form(),
        startup: session.startup().clone(),
        workout_count: workouts.len() as u32,
        last_logged_at: workouts.last().map(|w| format_utc_rfc3339(w.created_at)),
    })
}

// ─── Workouts ────────────────────────────────────────────────

/// All workouts in insertion order.
async fn get_workouts(State(state): State<Arc<AppState>>) -> Json<Vec<Workout>> {
    let session = state.session.lock().await;
    Json(session.workouts().to_vec())
}

/// Rendered list markup, most recent first.
async fn get_workout_list(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_workouts(session.workouts()))
}

/// Look up one workout by identifier.
async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    if id.len() > MAX_ID_LEN {
        return Err(AppError::BadRequest("Workout id too long".to_string()));
    }

    let session = state.session.lock().await;
    session
        .workout(&WorkoutId::new(id.clone()))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))
}

// ─── Map Overlay ─────────────────────────────────────────────

/// Marker overlay as GeoJSON.
async fn get_markers(State(state): State<Arc<AppState>>) -> Json<FeatureCollection> {
    let session = state.session.lock().await;
    Json(markers_geojson(session.workouts()))
}
