use serde::{Deserialize, Serialize};

use crate::config::{STEP_LENGTH_M, STROKE_LENGTH_M};

/// Workout kinds understood by the dispatcher, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Three-letter code sent by the sensor.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
        }
    }

    /// Distance covered by one step or stroke, in meters.
    pub fn step_length_m(self) -> f64 {
        match self {
            ActivityKind::Swimming => STROKE_LENGTH_M,
            ActivityKind::Running | ActivityKind::SportsWalking => STEP_LENGTH_M,
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }

    /// Comma separated list of valid codes, e.g. `SWM, RUN, WLK`.
    pub fn allowed_codes() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raw readings shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Steps or strokes counted by the sensor.
    pub action_count: u32,
    /// Must be nonzero.
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Reading {
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// A single training session bound to its kind.
///
/// Constructing a value directly skips the dispatcher's validation; callers
/// must then guarantee a nonzero `duration_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Training {
    Running {
        reading: Reading,
    },
    SportsWalking {
        reading: Reading,
        height_cm: f64,
    },
    Swimming {
        reading: Reading,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Training {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Training::Running { .. } => ActivityKind::Running,
            Training::SportsWalking { .. } => ActivityKind::SportsWalking,
            Training::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    pub fn reading(&self) -> &Reading {
        match self {
            Training::Running { reading }
            | Training::SportsWalking { reading, .. }
            | Training::Swimming { reading, .. } => reading,
        }
    }
}

/// Derived metrics for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

/// One raw package as it arrives from a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}
