// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View rendering: list-entry markup, marker popups, and the render
//! commands the browser executes after each event.

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject};
use serde::Serialize;
use serde_json::json;
use std::fmt::Write as _;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Coordinates, Workout, WorkoutId, WorkoutKind, WorkoutType};

const POPUP_MAX_WIDTH: u32 = 250;
const POPUP_MIN_WIDTH: u32 = 100;
const PAN_DURATION_SECS: f64 = 1.0;

/// Marker popup options and content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Popup {
    pub content: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

/// A single instruction for the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ViewCommand {
    /// Blocking user-facing alert.
    Alert { message: String },
    /// Create the map surface.
    LoadMap {
        center: Coordinates,
        zoom: u8,
        tile_url: String,
    },
    /// Reveal the form and focus the distance field.
    ShowForm { kind: WorkoutType },
    /// Clear and hide the form; restore its layout after the delay.
    HideForm {
        #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
        restore_layout_after_ms: u64,
    },
    /// Show the cadence field for running, elevation for cycling.
    ToggleKindFields { kind: WorkoutType },
    /// Insert a rendered entry at the top of the list.
    PrependListEntry { id: WorkoutId, html: String },
    /// Place a marker with an open popup.
    PlaceMarker {
        id: WorkoutId,
        at: Coordinates,
        popup: Popup,
    },
    /// Re-center the map.
    SetMapView {
        center: Coordinates,
        zoom: u8,
        animate: bool,
        pan_duration_secs: f64,
    },
}

impl ViewCommand {
    pub fn alert(message: impl Into<String>) -> Self {
        ViewCommand::Alert {
            message: message.into(),
        }
    }

    /// Animated pan to `center`.
    pub fn pan_to(center: Coordinates, zoom: u8) -> Self {
        ViewCommand::SetMapView {
            center,
            zoom,
            animate: true,
            pan_duration_secs: PAN_DURATION_SECS,
        }
    }
}

/// Commands produced by one event, executed in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ViewUpdate {
    pub commands: Vec<ViewCommand>,
}

impl ViewUpdate {
    /// Nothing to do.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(commands: Vec<ViewCommand>) -> Self {
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First alert message, if any.
    pub fn alert(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            ViewCommand::Alert { message } => Some(message.as_str()),
            _ => None,
        })
    }
}

/// Render one list entry.
pub fn render_workout(workout: &Workout) -> String {
    let kind = workout.workout_type();
    let mut html = format!(
        r#"<li class="workout workout--{kind}" data-id="{id}">
  <h2 class="workout__title">{description}</h2>
"#,
        kind = kind.as_str(),
        id = workout.id,
        description = workout.description,
    );

    push_detail(&mut html, kind.icon(), &workout.distance.to_string(), "km");
    push_detail(&mut html, "⏱", &workout.duration.to_string(), "min");

    match &workout.kind {
        WorkoutKind::Running { cadence, pace } => {
            push_detail(&mut html, "⚡️", &fixed_1(*pace), "min/km");
            push_detail(&mut html, "🦶🏼", &cadence.to_string(), "spm");
        }
        WorkoutKind::Cycling {
            elevation_gain,
            speed,
        } => {
            push_detail(&mut html, "⚡️", &fixed_1(*speed), "km/h");
            push_detail(&mut html, "⛰", &elevation_gain.to_string(), "m");
        }
    }

    html.push_str("</li>\n");
    html
}

/// One decimal place, ties rounded away from zero (5.25 -> "5.3").
fn fixed_1(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn push_detail(html: &mut String, icon: &str, value: &str, unit: &str) {
    // Writing to a String cannot fail.
    let _ = write!(
        html,
        r#"  <div class="workout__details">
    <span class="workout__icon">{icon}</span>
    <span class="workout__value">{value}</span>
    <span class="workout__unit">{unit}</span>
  </div>
"#
    );
}

/// Render the whole list, most recent first.
pub fn render_workouts(workouts: &[Workout]) -> String {
    workouts.iter().rev().map(render_workout).collect()
}

/// Popup shown on a workout's marker.
pub fn marker_popup(workout: &Workout) -> Popup {
    let kind = workout.workout_type();
    Popup {
        content: format!("{} {}", kind.icon(), workout.description),
        class_name: format!("{}-popup", kind.as_str()),
        max_width: POPUP_MAX_WIDTH,
        min_width: POPUP_MIN_WIDTH,
        auto_close: false,
        close_on_click: false,
    }
}

/// Marker overlay as a GeoJSON feature collection.
pub fn markers_geojson(workouts: &[Workout]) -> FeatureCollection {
    let features = workouts
        .iter()
        .map(|w| {
            let popup = marker_popup(w);
            let mut properties = JsonObject::new();
            properties.insert("type".to_string(), json!(w.workout_type()));
            properties.insert("description".to_string(), json!(w.description));
            properties.insert("popup_content".to_string(), json!(popup.content));
            properties.insert("popup_class".to_string(), json!(popup.class_name));

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&w.coords.to_point()))),
                id: Some(Id::String(w.id.to_string())),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
