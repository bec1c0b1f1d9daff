//! Configuration types for sensor package generation.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid weight range: {min}..={max} kg")]
    InvalidWeightRange { min: f64, max: f64 },

    #[error("Invalid activity mix: {0}")]
    InvalidMix(String),
}

/// Configuration for generation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of packages the `generate` binary produces.
    pub package_count: usize,

    /// Athlete weight range in kilograms (inclusive).
    pub weight_range_kg: (f64, f64),

    /// Seed for reproducible runs.
    pub seed: u64,

    /// Relative frequency of each activity, in `ActivityKind::ALL` order
    /// (swimming, running, sports walking).
    pub activity_mix: [f64; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_count: 20,
            weight_range_kg: (50.0, 110.0),
            seed: 12345,
            activity_mix: [0.2, 0.5, 0.3],
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.weight_range_kg;
        if !(min.is_finite() && max.is_finite() && 0.0 < min && min <= max) {
            return Err(ConfigError::InvalidWeightRange { min, max });
        }
        Ok(())
    }

    /// Seeded RNG for this configuration.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_weight_range() {
        let config = GeneratorConfig {
            weight_range_kg: (90.0, 60.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeightRange {
                min: 90.0,
                max: 60.0
            })
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{"package_count":5,"weight_range_kg":[60.0,80.0],"seed":7,"activity_mix":[0.0,1.0,0.0]}"#,
        )
        .unwrap();
        assert_eq!(config.package_count, 5);
        assert_eq!(config.weight_range_kg, (60.0, 80.0));
        assert!(config.validate().is_ok());
    }
}
