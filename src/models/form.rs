// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entry form: raw submitted fields and visibility state.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::workout::{Coordinates, WorkoutType};

/// Raw form fields exactly as typed by the user.
///
/// Numeric coercion happens in the workout factory. Only the field that
/// matches `kind` is read of `cadence` and `elevation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutForm {
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub cadence: String,
    #[serde(default)]
    pub elevation: String,
}

/// Visibility of the entry form.
///
/// `Shown` carries the map coordinate that opened it; the kind decides
/// whether the cadence or elevation field is visible.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FormState {
    #[default]
    Hidden,
    Shown { kind: WorkoutType, at: Coordinates },
}

impl FormState {
    pub fn is_shown(&self) -> bool {
        matches!(self, FormState::Shown { .. })
    }
}
