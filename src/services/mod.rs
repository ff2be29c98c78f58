// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod factory;
pub mod geolocation;
pub mod store;
pub mod view;

pub use factory::{build_workout, ElevationPolicy, WorkoutError};
pub use geolocation::{GeolocationError, GeolocationSource};
pub use store::WorkoutStore;
pub use view::{ViewCommand, ViewUpdate};
