//! Core domain types for Fittrack.
//!
//! This module defines the shared constants and the input package type:
//! - Unit conversions and step lengths
//! - Workout kinds and their codes
//! - Sensor packages as read by the batch driver

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Step length for land workouts, in meters
pub const LEN_STEP: f64 = 0.65;

/// Stroke length for swimming, in meters
pub const SWIM_LEN_STEP: f64 = 1.38;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Type of workout a calculator handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Display name used as the report's training type
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Sensor code for this workout
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Packages
// ============================================================================

/// Raw sensor package: a workout code and its positional parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_and_codes() {
        assert_eq!(WorkoutKind::Running.name(), "Running");
        assert_eq!(WorkoutKind::SportsWalking.code(), "WLK");
        assert_eq!(WorkoutKind::Swimming.to_string(), "Swimming");
    }

    #[test]
    fn test_package_deserializes_from_json() {
        let pkg: Package =
            serde_json::from_str(r#"{"workout_type":"RUN","data":[15000,1,75]}"#).unwrap();
        assert_eq!(pkg, Package::new("RUN", vec![15000.0, 1.0, 75.0]));
    }
}
