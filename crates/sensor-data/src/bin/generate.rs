//! Generates synthetic sensor packages and prints their reports.
//!
//! Run with:
//! ```
//! cargo run -p sensor-data --bin generate
//! ```

use std::collections::BTreeMap;

use sensor_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::default();
    let mut rng = config.rng(); // Reproducible data
    let package_gen = PackageGenerator::with_config(config)?;

    let packages = package_gen.generate_batch(package_gen.config().package_count, &mut rng);

    let mut per_code: BTreeMap<&str, usize> = BTreeMap::new();
    for package in &packages {
        *per_code.entry(package.code.as_str()).or_default() += 1;
    }

    for report in workouts::process_packages(&packages)? {
        println!("{report}");
    }

    // Summary output
    tracing::info!("Generation completed!");
    for (code, count) in per_code {
        tracing::info!("  {code}: {count}");
    }

    Ok(())
}
