//! Workout calculators.
//!
//! Every workout shares the base measurements (actions, duration, weight) and
//! the distance/speed formulas; each variant supplies its own calorie formula.
//! `Calculation` carries the shared formulas as provided methods and leaves
//! `get_spent_calories` required, so a calculator without a calorie formula
//! does not compile.

use crate::{Error, InfoMessage, Result, WorkoutKind, LEN_STEP, MIN_IN_H, M_IN_KM, SWIM_LEN_STEP};

/// Measurements shared by every workout
#[derive(Clone, Debug, PartialEq)]
pub struct Workout {
    /// Steps or strokes counted by the sensor
    pub action: u64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl Workout {
    /// Validate and build the shared measurements
    ///
    /// Duration and weight must be finite and strictly positive, so the
    /// speed formulas never divide by zero.
    pub fn new(kind: WorkoutKind, action: u64, duration: f64, weight: f64) -> Result<Self> {
        require_positive(kind, "duration", duration)?;
        require_positive(kind, "weight", weight)?;
        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

pub(crate) fn require_positive(kind: WorkoutKind, field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(
            kind.code(),
            format!("{} must be a positive number, got {}", field, value),
        ));
    }
    Ok(value)
}

/// Shared calculation contract for all workouts
pub trait Calculation {
    /// Distance covered by one action, in meters
    const LEN_STEP: f64 = LEN_STEP;

    fn kind(&self) -> WorkoutKind;

    fn workout(&self) -> &Workout;

    /// Distance in kilometers
    fn get_distance(&self) -> f64 {
        self.workout().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed over the whole workout, km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.workout().duration
    }

    /// Calories burned
    fn get_spent_calories(&self) -> f64;

    /// Build the summary record for this workout
    fn show_training_info(&self) -> InfoMessage {
        let message = InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.workout().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        };
        tracing::debug!(
            "Computed {}: {:.3} km, {:.3} km/h, {:.3} kcal",
            message.training_type,
            message.distance,
            message.speed,
            message.calories
        );
        message
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub workout: Workout,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(WorkoutKind::Running, action, duration, weight)?,
        })
    }
}

impl Calculation for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.workout.weight
            / M_IN_KM
            * (MIN_IN_H * self.workout.duration)
    }
}

// ============================================================================
// Sports walking
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub workout: Workout,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let workout = Workout::new(WorkoutKind::SportsWalking, action, duration, weight)?;
        let height = require_positive(WorkoutKind::SportsWalking, "height", height)?;
        Ok(Self { workout, height })
    }
}

impl Calculation for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    // The speed/height term is floor-divided, not a real quotient.
    fn get_spent_calories(&self) -> f64 {
        let speed_term = floor_div(self.get_mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.workout.weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.workout.weight)
            * (MIN_IN_H * self.workout.duration)
    }
}

/// Floor division on floats, rounding the way Python's `//` does
///
/// The quotient is taken from `a - a % b` rather than from `a / b`, so a
/// quotient that would round up to the next whole number stays below it.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub workout: Workout,
    /// Meters
    pub length_pool: f64,
    pub count_pool: u64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u64,
    ) -> Result<Self> {
        let workout = Workout::new(WorkoutKind::Swimming, action, duration, weight)?;
        let length_pool = require_positive(WorkoutKind::Swimming, "length_pool", length_pool)?;
        Ok(Self {
            workout,
            length_pool,
            count_pool,
        })
    }
}

impl Calculation for Swimming {
    const LEN_STEP: f64 = SWIM_LEN_STEP;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    /// Speed from pool laps; the stroke count only feeds the distance field.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.workout.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.workout.weight
    }
}

// ============================================================================
// Training (dispatch target)
// ============================================================================

/// Any concrete workout calculator
#[derive(Clone, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(t) => t.kind(),
            Training::SportsWalking(t) => t.kind(),
            Training::Swimming(t) => t.kind(),
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_distance(),
            Training::SportsWalking(t) => t.get_distance(),
            Training::Swimming(t) => t.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_mean_speed(),
            Training::SportsWalking(t) => t.get_mean_speed(),
            Training::Swimming(t) => t.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_spent_calories(),
            Training::SportsWalking(t) => t.get_spent_calories(),
            Training::Swimming(t) => t.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Training::Running(t) => t.show_training_info(),
            Training::SportsWalking(t) => t.show_training_info(),
            Training::Swimming(t) => t.show_training_info(),
        }
    }
}

impl From<Running> for Training {
    fn from(t: Running) -> Self {
        Training::Running(t)
    }
}

impl From<SportsWalking> for Training {
    fn from(t: SportsWalking) -> Self {
        Training::SportsWalking(t)
    }
}

impl From<Swimming> for Training {
    fn from(t: Swimming) -> Self {
        Training::Swimming(t)
    }
}
