// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout factory: turns raw form fields into a validated workout.
//!
//! Distance, duration and cadence must be finite and strictly positive.
//! Elevation must be finite; whether it may be negative is decided by the
//! configured [`ElevationPolicy`].

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::models::{Coordinates, Workout, WorkoutForm, WorkoutId, WorkoutKind, WorkoutType};

/// Message shown to the user for any rejected submission.
pub const INVALID_INPUT_ALERT: &str = "Inputs have to be positive numbers!";

/// Sign rule applied to cycling elevation gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElevationPolicy {
    /// Reject negative elevation gain.
    #[default]
    NonNegative,
    /// Accept any finite elevation gain.
    Unchecked,
}

impl FromStr for ElevationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "non-negative" | "non_negative" => Ok(ElevationPolicy::NonNegative),
            "unchecked" => Ok(ElevationPolicy::Unchecked),
            other => Err(format!("unknown elevation policy '{}'", other)),
        }
    }
}

/// Reasons a submitted form is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("{0} must be a whole number")]
    NotWhole(&'static str),

    #[error("{0} is out of range")]
    OutOfRange(&'static str),
}

/// Build a workout from the submitted form.
///
/// `coords` is the map position that opened the form, `id` the identifier
/// allocated by the store. Nothing is produced unless every field relevant
/// to the chosen kind passes validation.
pub fn build_workout(
    form: &WorkoutForm,
    coords: Coordinates,
    id: WorkoutId,
    now: DateTime<Utc>,
    policy: ElevationPolicy,
) -> Result<Workout, WorkoutError> {
    let distance = positive("distance", &form.distance)?;
    let duration = positive("duration", &form.duration)?;

    match form.kind {
        WorkoutType::Running => {
            let cadence = positive("cadence", &form.cadence)?;
            if cadence.fract() != 0.0 {
                return Err(WorkoutError::NotWhole("cadence"));
            }
            if cadence > f64::from(u32::MAX) {
                return Err(WorkoutError::OutOfRange("cadence"));
            }
            let workout = Workout::running(id, now, coords, distance, duration, cadence as u32);
            derived_finite(workout)
        }
        WorkoutType::Cycling => {
            let elevation = finite("elevation", &form.elevation)?;
            if policy == ElevationPolicy::NonNegative && elevation < 0.0 {
                return Err(WorkoutError::Negative("elevation"));
            }
            let workout = Workout::cycling(id, now, coords, distance, duration, elevation);
            derived_finite(workout)
        }
    }
}

/// Extreme but finite inputs can still overflow pace or speed.
fn derived_finite(workout: Workout) -> Result<Workout, WorkoutError> {
    match workout.kind {
        WorkoutKind::Running { pace, .. } if !pace.is_finite() => {
            Err(WorkoutError::OutOfRange("pace"))
        }
        WorkoutKind::Cycling { speed, .. } if !speed.is_finite() => {
            Err(WorkoutError::OutOfRange("speed"))
        }
        _ => Ok(workout),
    }
}

fn finite(field: &'static str, raw: &str) -> Result<f64, WorkoutError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WorkoutError::Missing(field));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WorkoutError::NotFinite(field)),
    }
}

fn positive(field: &'static str, raw: &str) -> Result<f64, WorkoutError> {
    let value = finite(field, raw)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::NotPositive(field))
    }
}
