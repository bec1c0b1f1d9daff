//! Fixed coefficient tables for the calorie formulas.
//!
//! Every activity carries its own table. The calculator reads them through
//! [`CoefficientTables`]; `CoefficientTables::DEFAULT` holds the fixed values.

use serde::Serialize;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Length of a single step (running and walking), in meters.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Length of a single swimming stroke, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Coefficients for the running calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunningCoefficients {
    /// Multiplier applied to mean speed.
    pub speed_multiplier: f64,
    /// Offset subtracted from the scaled speed.
    pub speed_shift: f64,
}

impl RunningCoefficients {
    pub const DEFAULT: Self = Self {
        speed_multiplier: 18.0,
        speed_shift: 20.0,
    };
}

/// Coefficients for the sports walking calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WalkingCoefficients {
    /// Per-kilogram base burn.
    pub weight_multiplier: f64,
    /// Per-kilogram multiplier for the speed/height term.
    pub speed_height_multiplier: f64,
}

impl WalkingCoefficients {
    pub const DEFAULT: Self = Self {
        weight_multiplier: 0.035,
        speed_height_multiplier: 0.029,
    };
}

/// Coefficients for the swimming calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwimmingCoefficients {
    /// Offset added to mean speed.
    pub speed_shift: f64,
    /// Multiplier applied to the shifted speed.
    pub weight_multiplier: f64,
}

impl SwimmingCoefficients {
    pub const DEFAULT: Self = Self {
        speed_shift: 1.1,
        weight_multiplier: 2.0,
    };
}

/// All coefficient tables in one place, as consumed by
/// `Training::spent_calories_with`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientTables {
    pub running: RunningCoefficients,
    pub walking: WalkingCoefficients,
    pub swimming: SwimmingCoefficients,
}

impl CoefficientTables {
    pub const DEFAULT: Self = Self {
        running: RunningCoefficients::DEFAULT,
        walking: WalkingCoefficients::DEFAULT,
        swimming: SwimmingCoefficients::DEFAULT,
    };
}

impl Default for CoefficientTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}
