//! Built-in sensor packages and the batch pipeline.

use tracing::info;

use crate::dispatcher::read_package;
use crate::errors::Result;
use crate::models::SensorPackage;

/// Packages processed by the `workouts` binary, in output order.
pub const BUILTIN_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn builtin_packages() -> Vec<SensorPackage> {
    BUILTIN_PACKAGES
        .iter()
        .map(|(code, data)| SensorPackage::new(*code, *data))
        .collect()
}

/// Resolves and renders every package in input order.
///
/// The first invalid package aborts the batch.
pub fn process_packages(packages: &[SensorPackage]) -> Result<Vec<String>> {
    let reports = packages
        .iter()
        .map(|package| read_package(package).map(|training| training.summary().message()))
        .collect::<Result<Vec<_>>>()?;

    info!("Processed {} packages", reports.len());
    Ok(reports)
}
