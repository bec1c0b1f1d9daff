//! Maps sensor packages onto training variants.

use tracing::{debug, warn};

use crate::errors::{Result, WorkoutError};
use crate::models::{ActivityKind, Reading, SensorPackage, Training};

/// Resolves an activity code and binds `data` positionally.
///
/// Running takes `(action, duration, weight)`, sports walking adds `height`,
/// swimming adds `pool_length` and `pool_laps`.
pub fn resolve(code: &str, data: &[f64]) -> Result<Training> {
    let kind = ActivityKind::from_code(code).ok_or_else(|| {
        warn!("Rejected package with unknown code {code:?}");
        WorkoutError::UnknownActivityCode {
            code: code.to_string(),
        }
    })?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let reading = Reading::new(
        whole_number("action", data[0])?,
        duration(data[1])?,
        data[2],
    );

    let training = match kind {
        ActivityKind::Running => Training::Running { reading },
        ActivityKind::SportsWalking => Training::SportsWalking {
            reading,
            height_cm: data[3],
        },
        ActivityKind::Swimming => Training::Swimming {
            reading,
            pool_length_m: data[3],
            pool_laps: whole_number("pool_laps", data[4])?,
        },
    };

    debug!(code, ?training, "Resolved package");
    Ok(training)
}

pub fn read_package(package: &SensorPackage) -> Result<Training> {
    resolve(&package.code, &package.data)
}

fn whole_number(field: &'static str, value: f64) -> Result<u32> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::NotAWholeNumber { field, value })
    }
}

fn duration(value: f64) -> Result<f64> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidDuration(value))
    }
}
