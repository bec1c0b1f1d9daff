//! Sports walker profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use workouts::ActivityKind;

use super::AthleteProfile;

/// Athletic profile for sports walking.
///
/// Walkers take ~120 steps/min for about 1.5 hours. Height is sampled around
/// an adult mean and appended to the package.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    cadence_per_min: f64,
    duration_hours: f64,
    variance: f64,
    height_mean_cm: f64,
    height_std_cm: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence_per_min: 120.0,
            duration_hours: 1.5,
            variance: 0.1,
            height_mean_cm: 172.0,
            height_std_cm: 9.0,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
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

    fn extra_values(&self, _action_count: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let height = Normal::new(self.height_mean_cm, self.height_std_cm)
            .map(|normal| normal.sample(rng))
            .unwrap_or(self.height_mean_cm);
        vec![height.clamp(140.0, 210.0).round()]
    }
}
