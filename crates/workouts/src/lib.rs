//! Workout metrics: distance, mean speed and calories for running,
//! sports walking and swimming sessions.
//!
//! ```rust
//! use workouts::dispatcher::resolve;
//!
//! let training = resolve("RUN", &[15000.0, 1.0, 75.0])?;
//! assert_eq!(
//!     training.summary().message(),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
//! );
//! # Ok::<(), workouts::errors::WorkoutError>(())
//! ```

pub mod calculator;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod packages;
pub mod reporter;

pub use dispatcher::{read_package, resolve};
pub use errors::WorkoutError;
pub use models::{ActivityKind, Metrics, Reading, SensorPackage, Training};
pub use packages::{builtin_packages, process_packages};
pub use reporter::{InfoMessage, render};
