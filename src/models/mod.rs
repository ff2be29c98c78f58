// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod form;
pub mod workout;

pub use form::{FormState, WorkoutForm};
pub use workout::{Coordinates, Workout, WorkoutId, WorkoutKind, WorkoutType};
