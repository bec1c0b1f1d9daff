//! Synthetic sensor packages for workouts.
//!
//! Athlete profiles describe realistic cadence, session length and
//! variant-specific values per activity; the package generator turns them into
//! [`SensorPackage`]s that the `workouts` dispatcher accepts.
//!
//! ```rust
//! use sensor_data::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let mut rng = config.rng();
//! let packages = PackageGenerator::with_config(config)?.generate_batch(10, &mut rng);
//! let reports = workouts::process_packages(&packages)?;
//! assert_eq!(reports.len(), 10);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub use workouts::{ActivityKind, SensorPackage};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, GeneratorConfig};
    pub use crate::generators::PackageGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{ActivityKind, SensorPackage};
}
