//! Athlete profiles per activity.
//!
//! Profiles define realistic cadence, session length and the trailing
//! variant-specific values of a package. The package generator uses them to
//! produce data that resolves cleanly.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::{Rng, RngCore};
use workouts::ActivityKind;

/// Trait for athlete profiles.
///
/// Implementations provide:
/// - The activity they describe
/// - Cadence (steps or strokes per hour)
/// - Typical session length
/// - Day-to-day variance
/// - Values that follow `(action, duration, weight)` in a package
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> ActivityKind;

    /// Steps or strokes per hour at a steady effort.
    fn cadence_per_hour(&self) -> f64;

    /// Typical session length in hours.
    fn typical_duration_hours(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Variant-specific values appended after the weight.
    fn extra_values(&self, action_count: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_variance_is_clamped() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_profiles_match_kinds() {
        assert_eq!(RunnerProfile::default().kind(), ActivityKind::Running);
        assert_eq!(WalkerProfile::default().kind(), ActivityKind::SportsWalking);
        assert_eq!(SwimmerProfile::default().kind(), ActivityKind::Swimming);
    }
}
