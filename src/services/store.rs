// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only in-memory workout store.

use chrono::{DateTime, Utc};

use crate::models::{Workout, WorkoutId};

/// Identifiers keep the last ten decimal digits of the epoch millis.
const ID_MODULUS: i64 = 10_000_000_000;

/// Ordered sequence of workouts for the current session.
///
/// Insertion order is preserved; there is no update or delete beyond the
/// click counter.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an identifier derived from `now`.
    ///
    /// If the candidate is already taken (two submissions in the same
    /// millisecond) it is bumped to the next free value.
    pub fn allocate_id(&self, now: DateTime<Utc>) -> WorkoutId {
        let mut candidate = now.timestamp_millis().rem_euclid(ID_MODULUS);
        loop {
            let id = WorkoutId::new(format!("{:010}", candidate));
            if self.get(&id).is_none() {
                return id;
            }
            candidate = (candidate + 1) % ID_MODULUS;
        }
    }

    /// Append a workout. Returns a reference to the stored record.
    pub fn push(&mut self, workout: Workout) -> &Workout {
        self.workouts.push(workout);
        &self.workouts[self.workouts.len() - 1]
    }

    /// Look up a workout by identifier (linear scan).
    pub fn get(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| &w.id == id)
    }

    /// Increment the click counter of one workout.
    pub fn record_click(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let workout = self.workouts.iter_mut().find(|w| &w.id == id)?;
        workout.click();
        Some(workout)
    }

    /// All workouts in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
