//! Pool swimmer profile.

use rand::{Rng, RngCore};
use workouts::ActivityKind;

use super::AthleteProfile;

/// Standard pool lengths in meters.
const POOL_LENGTHS_M: [f64; 2] = [25.0, 50.0];

/// Athletic profile for pool swimming.
///
/// ~30 strokes/min over a one hour session. Laps are derived from the
/// stroke count so the package stays internally consistent.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    cadence_per_min: f64,
    duration_hours: f64,
    variance: f64,
    /// Meters covered per stroke.
    stroke_length_m: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            cadence_per_min: 30.0,
            duration_hours: 1.0,
            variance: 0.12,
            stroke_length_m: 1.38,
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
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

    fn extra_values(&self, action_count: f64, rng: &mut dyn RngCore) -> Vec<f64> {
        let pool_length = POOL_LENGTHS_M[rng.gen_range(0..POOL_LENGTHS_M.len())];
        let laps = (action_count * self.stroke_length_m / pool_length).round();
        vec![pool_length, laps]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_laps_follow_strokes() {
        let profile = SwimmerProfile::default();
        let mut rng = StdRng::seed_from_u64(5);
        let extra = profile.extra_values(720.0, &mut rng);
        let (pool_length, laps) = (extra[0], extra[1]);
        assert!(POOL_LENGTHS_M.contains(&pool_length));
        assert_eq!(laps, (720.0 * 1.38 / pool_length).round());
    }
}
