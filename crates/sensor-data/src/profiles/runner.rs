//! Runner athletic profile.

use rand::RngCore;
use workouts::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Based on a recreational runner:
/// - Cadence: ~165 steps/min
/// - Session: ~1 hour
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    cadence_per_min: f64,
    duration_hours: f64,
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence_per_min: 165.0,
            duration_hours: 1.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence_per_min: f64) -> Self {
        Self {
            cadence_per_min,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~185 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(185.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn cadence_per_hour(&self) -> f64 {
        self.cadence_per_min * 60.0
    }

    fn typical_duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_values(&self, _action_count: f64, _rng: &mut dyn RngCore) -> Vec<f64> {
        Vec::new()
    }
}
