//! Sensor package generation from athlete profiles.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;
use workouts::{ActivityKind, SensorPackage};

use crate::config::{ConfigError, GeneratorConfig};
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
};

/// Shortest session the generator emits, in hours.
const MIN_DURATION_HOURS: f64 = 0.25;

/// Generates sensor packages that resolve cleanly.
pub struct PackageGenerator {
    config: GeneratorConfig,
    mix: WeightedIndex<f64>,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl PackageGenerator {
    /// Creates a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mix = WeightedIndex::new(config.activity_mix)
            .map_err(|e| ConfigError::InvalidMix(e.to_string()))?;

        Ok(Self {
            config,
            mix,
            runner: RunnerProfile::default(),
            walker: WalkerProfile::default(),
            swimmer: SwimmerProfile::default(),
        })
    }

    /// Replaces the runner profile.
    pub fn with_runner(mut self, runner: RunnerProfile) -> Self {
        self.runner = runner;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn profile(&self, kind: ActivityKind) -> &dyn AthleteProfile {
        match kind {
            ActivityKind::Running => &self.runner,
            ActivityKind::SportsWalking => &self.walker,
            ActivityKind::Swimming => &self.swimmer,
        }
    }

    /// Generates a single package of a kind picked from the activity mix.
    pub fn generate(&self, rng: &mut impl Rng) -> SensorPackage {
        let kind = ActivityKind::ALL[self.mix.sample(rng)];
        self.generate_kind(kind, rng)
    }

    /// Generates a single package of the given kind.
    pub fn generate_kind(&self, kind: ActivityKind, rng: &mut impl Rng) -> SensorPackage {
        let profile = self.profile(kind);

        let duration = (profile.typical_duration_hours() * sample_variance(profile, rng) * 100.0)
            .round()
            / 100.0;
        let duration = duration.max(MIN_DURATION_HOURS);
        let actions = (profile.cadence_per_hour() * duration * sample_variance(profile, rng)).round();

        let (min_weight, max_weight) = self.config.weight_range_kg;
        let weight = (rng.gen_range(min_weight..=max_weight) * 10.0).round() / 10.0;

        let mut data = vec![actions, duration, weight];
        data.extend(profile.extra_values(actions, rng));

        debug!(code = kind.code(), ?data, "Generated package");
        SensorPackage::new(kind.code(), data)
    }

    /// Generates multiple packages.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<SensorPackage> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
