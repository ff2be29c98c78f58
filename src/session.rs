// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page session state and UI event dispatch.
//!
//! A [`Session`] holds everything the page mutates: the map view (absent
//! when geolocation failed), the entry form, and the workout store. Every
//! browser event goes through [`Session::dispatch`], which returns the
//! render commands that keep the list and the map overlay in lockstep with
//! the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::models::{Coordinates, FormState, Workout, WorkoutForm, WorkoutId, WorkoutType};
use crate::services::factory::{build_workout, ElevationPolicy, INVALID_INPUT_ALERT};
use crate::services::geolocation::GeolocationError;
use crate::services::store::WorkoutStore;
use crate::services::view::{marker_popup, render_workout, ViewCommand, ViewUpdate};

/// Alert raised when the startup position could not be determined.
pub const GEOLOCATION_ALERT: &str = "Could not get your position";

/// Session tunables, taken from [`Config`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub map_zoom: u8,
    pub tile_url: String,
    pub form_hide_delay_ms: u64,
    pub elevation_policy: ElevationPolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            map_zoom: config.map_zoom,
            tile_url: config.tile_url.clone(),
            form_hide_delay_ms: config.form_hide_delay_ms,
            elevation_policy: config.elevation_policy,
        }
    }
}

/// Current map view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: String,
}

/// Events emitted by the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum UiEvent {
    /// Click on the map surface.
    MapClick { at: Coordinates },
    /// Kind selector changed.
    KindChange { kind: WorkoutType },
    /// Form submitted.
    Submit { form: WorkoutForm },
    /// Click inside the list; `id` is absent when no entry was hit.
    Select {
        #[serde(default)]
        id: Option<WorkoutId>,
    },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::MapClick { .. } => "map_click",
            UiEvent::KindChange { .. } => "kind_change",
            UiEvent::Submit { .. } => "submit",
            UiEvent::Select { .. } => "select",
        }
    }
}

/// State of one page session.
#[derive(Debug)]
pub struct Session {
    settings: SessionSettings,
    map: Option<MapView>,
    form: FormState,
    kind_selector: WorkoutType,
    store: WorkoutStore,
    startup: ViewUpdate,
}

impl Session {
    /// Start a session from the outcome of the startup geolocation lookup.
    pub fn start(
        settings: SessionSettings,
        position: Result<Coordinates, GeolocationError>,
    ) -> Self {
        let (map, startup) = match position {
            Ok(center) => {
                tracing::info!(lat = center.lat, lng = center.lng, "Map centered on position");
                let map = MapView {
                    center,
                    zoom: settings.map_zoom,
                    tile_url: settings.tile_url.clone(),
                };
                let update = ViewUpdate::with(vec![ViewCommand::LoadMap {
                    center,
                    zoom: map.zoom,
                    tile_url: map.tile_url.clone(),
                }]);
                (Some(map), update)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geolocation failed; map disabled for this session");
                (None, ViewUpdate::with(vec![ViewCommand::alert(GEOLOCATION_ALERT)]))
            }
        };

        Self {
            settings,
            map,
            form: FormState::Hidden,
            kind_selector: WorkoutType::default(),
            store: WorkoutStore::new(),
            startup,
        }
    }

    /// Route an event to its handler.
    pub fn dispatch(&mut self, event: UiEvent, now: DateTime<Utc>) -> ViewUpdate {
        tracing::debug!(event = event.name(), "Dispatching UI event");
        match event {
            UiEvent::MapClick { at } => self.on_map_click(at),
            UiEvent::KindChange { kind } => self.on_kind_change(kind),
            UiEvent::Submit { form } => self.on_submit(&form, now),
            UiEvent::Select { id } => self.on_select(id.as_ref()),
        }
    }

    fn on_map_click(&mut self, at: Coordinates) -> ViewUpdate {
        if self.map.is_none() {
            return ViewUpdate::none();
        }

        self.form = FormState::Shown {
            kind: self.kind_selector,
            at,
        };
        ViewUpdate::with(vec![ViewCommand::ShowForm {
            kind: self.kind_selector,
        }])
    }

    fn on_kind_change(&mut self, kind: WorkoutType) -> ViewUpdate {
        self.kind_selector = kind;
        if let FormState::Shown { at, .. } = self.form {
            self.form = FormState::Shown { kind, at };
        }
        ViewUpdate::with(vec![ViewCommand::ToggleKindFields { kind }])
    }

    fn on_submit(&mut self, form: &WorkoutForm, now: DateTime<Utc>) -> ViewUpdate {
        let FormState::Shown { at, .. } = self.form else {
            tracing::debug!("Submit ignored: form is not open");
            return ViewUpdate::none();
        };

        let id = self.store.allocate_id(now);
        let workout = match build_workout(form, at, id, now, self.settings.elevation_policy) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::warn!(error = %e, kind = ?form.kind, "Rejected workout submission");
                return ViewUpdate::with(vec![ViewCommand::alert(INVALID_INPUT_ALERT)]);
            }
        };
        self.kind_selector = form.kind;

        let workout = self.store.push(workout);
        tracing::info!(
            id = %workout.id,
            kind = ?workout.workout_type(),
            distance = workout.distance,
            duration = workout.duration,
            "Workout logged"
        );

        let commands = vec![
            ViewCommand::PlaceMarker {
                id: workout.id.clone(),
                at: workout.coords,
                popup: marker_popup(workout),
            },
            ViewCommand::PrependListEntry {
                id: workout.id.clone(),
                html: render_workout(workout),
            },
            ViewCommand::HideForm {
                restore_layout_after_ms: self.settings.form_hide_delay_ms,
            },
        ];
        self.form = FormState::Hidden;
        ViewUpdate::with(commands)
    }

    fn on_select(&mut self, id: Option<&WorkoutId>) -> ViewUpdate {
        let Some(id) = id else {
            return ViewUpdate::none();
        };
        let Some(map) = self.map.as_mut() else {
            return ViewUpdate::none();
        };
        let Some(workout) = self.store.record_click(id) else {
            tracing::debug!(id = %id, "Select ignored: unknown workout");
            return ViewUpdate::none();
        };

        map.center = workout.coords;
        tracing::debug!(id = %workout.id, clicks = workout.clicks, "Workout selected");
        ViewUpdate::with(vec![ViewCommand::pan_to(workout.coords, map.zoom)])
    }

    /// Commands produced at startup (map load or geolocation alert).
    pub fn startup(&self) -> &ViewUpdate {
        &self.startup
    }

    pub fn map(&self) -> Option<&MapView> {
        self.map.as_ref()
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }

    pub fn workout(&self, id: &WorkoutId) -> Option<&Workout> {
        self.store.get(id)
    }
}
