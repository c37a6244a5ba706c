//! Workout code registry.
//!
//! Maps the sensor's short workout codes to calculator constructors and
//! validates package parameters before anything is built.

use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::{Error, Result, WorkoutKind};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// A registered workout: its kind, parameter names and constructor
pub struct Entry {
    pub kind: WorkoutKind,
    /// Parameter names in positional order
    pub params: &'static [&'static str],
    build: fn(&[f64]) -> Result<Training>,
}

/// Cached code table - built once and reused for every package
static REGISTRY: Lazy<BTreeMap<&'static str, Entry>> = Lazy::new(build_registry);

fn build_registry() -> BTreeMap<&'static str, Entry> {
    let mut table = BTreeMap::new();

    table.insert(
        WorkoutKind::Swimming.code(),
        Entry {
            kind: WorkoutKind::Swimming,
            params: &["action", "duration", "weight", "length_pool", "count_pool"],
            build: build_swimming,
        },
    );

    table.insert(
        WorkoutKind::Running.code(),
        Entry {
            kind: WorkoutKind::Running,
            params: &["action", "duration", "weight"],
            build: build_running,
        },
    );

    table.insert(
        WorkoutKind::SportsWalking.code(),
        Entry {
            kind: WorkoutKind::SportsWalking,
            params: &["action", "duration", "weight", "height"],
            build: build_sports_walking,
        },
    );

    table
}

fn build_running(data: &[f64]) -> Result<Training> {
    let action = count(WorkoutKind::Running, "action", data[0])?;
    Ok(Running::new(action, data[1], data[2])?.into())
}

fn build_sports_walking(data: &[f64]) -> Result<Training> {
    let action = count(WorkoutKind::SportsWalking, "action", data[0])?;
    Ok(SportsWalking::new(action, data[1], data[2], data[3])?.into())
}

fn build_swimming(data: &[f64]) -> Result<Training> {
    let action = count(WorkoutKind::Swimming, "action", data[0])?;
    let count_pool = count(WorkoutKind::Swimming, "count_pool", data[4])?;
    Ok(Swimming::new(action, data[1], data[2], data[3], count_pool)?.into())
}

/// Convert a sensor reading into a non-negative whole count
fn count(kind: WorkoutKind, field: &str, value: f64) -> Result<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(Error::invalid(
            kind.code(),
            format!("{} must be a non-negative whole number, got {}", field, value),
        ));
    }
    Ok(value as u64)
}

/// Look up the registry entry for a workout code
pub fn lookup(code: &str) -> Result<&'static Entry> {
    REGISTRY
        .get(code)
        .ok_or_else(|| Error::UnknownWorkoutCode(code.to_string()))
}

/// Registered workout codes, sorted
pub fn known_codes() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

/// Build the calculator for a sensor package
///
/// Parameters are applied positionally in the variant's declared order:
/// `action, duration, weight` followed by `height` (WLK) or
/// `length_pool, count_pool` (SWM).
pub fn read_package(code: &str, data: &[f64]) -> Result<Training> {
    let entry = lookup(code)?;

    if data.len() != entry.params.len() {
        return Err(Error::invalid(
            code,
            format!(
                "expected {} parameters ({}), got {}",
                entry.params.len(),
                entry.params.join(", "),
                data.len()
            ),
        ));
    }

    let training = (entry.build)(data)?;
    tracing::debug!("Built {} calculator from {:?}", entry.kind, data);
    Ok(training)
}
