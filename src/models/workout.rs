// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time_utils::format_month_day;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Timestamp-derived workout identifier (last ten digits of epoch millis).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Convert to a geo point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}

/// Kind discriminant, as carried by the kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    /// Lowercase name used in CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

/// Kind-specific payload with its derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running {
        /// Steps per minute
        cadence: u32,
        /// Minutes per kilometer
        pace: f64,
    },
    Cycling {
        /// Meters climbed
        elevation_gain: f64,
        /// Kilometers per hour
        speed: f64,
    },
}

/// A single logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    pub id: WorkoutId,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    pub coords: Coordinates,
    /// Kilometers
    pub distance: f64,
    /// Minutes
    pub duration: f64,
    /// e.g. "Running on April 14"
    pub description: String,
    /// Times this record was selected in the list
    pub clicks: u32,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    /// Build a running workout; pace = duration / distance.
    pub fn running(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        cadence: u32,
    ) -> Self {
        let kind = WorkoutKind::Running {
            cadence,
            pace: duration / distance,
        };
        Self::with_kind(id, created_at, coords, distance, duration, kind)
    }

    /// Build a cycling workout; speed = distance / (duration / 60).
    pub fn cycling(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        let kind = WorkoutKind::Cycling {
            elevation_gain,
            speed: distance / (duration / 60.0),
        };
        Self::with_kind(id, created_at, coords, distance, duration, kind)
    }

    fn with_kind(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        kind: WorkoutKind,
    ) -> Self {
        let mut workout = Self {
            id,
            created_at,
            coords,
            distance,
            duration,
            description: String::new(),
            clicks: 0,
            kind,
        };
        workout.description = describe(workout.workout_type(), created_at);
        workout
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub(crate) fn click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }
}

/// "Running on April 14"
fn describe(kind: WorkoutType, date: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), format_month_day(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn april_14() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_running_pace() {
        let w = Workout::running(
            WorkoutId::new("1"),
            april_14(),
            Coordinates::new(39.7, -75.5),
            5.0,
            25.0,
            180,
        );
        assert_eq!(
            w.kind,
            WorkoutKind::Running {
                cadence: 180,
                pace: 5.0
            }
        );
        assert_eq!(w.description, "Running on April 14");
        assert_eq!(w.clicks, 0);
    }

    #[test]
    fn test_cycling_speed() {
        let w = Workout::cycling(
            WorkoutId::new("2"),
            Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap(),
            Coordinates::new(39.7, -75.5),
            20.0,
            60.0,
            300.0,
        );
        match w.kind {
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            } => {
                assert_eq!(elevation_gain, 300.0);
                assert_eq!(speed, 20.0);
            }
            other => panic!("expected cycling, got {:?}", other),
        }
        assert_eq!(w.description, "Cycling on March 5");
        assert_eq!(w.workout_type(), WorkoutType::Cycling);
    }

    #[test]
    fn test_serializes_flat_with_type_tag() {
        let w = Workout::running(
            WorkoutId::new("1234567890"),
            april_14(),
            Coordinates::new(1.0, 2.0),
            5.0,
            25.0,
            180,
        );
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["id"], "1234567890");
        assert_eq!(json["type"], "running");
        assert_eq!(json["cadence"], 180);
        assert_eq!(json["pace"], 5.0);
        assert_eq!(json["coords"]["lat"], 1.0);
    }

    #[test]
    fn test_coordinates_validity() {
        assert!(Coordinates::new(45.0, 120.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -181.0).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }
}
