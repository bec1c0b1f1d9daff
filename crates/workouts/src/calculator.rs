//! Distance, speed and calorie formulas.
//!
//! Each kind has one fixed formula, selected by matching on [`Training`].
//! All functions are pure; they assume a nonzero duration.

use crate::config::{CoefficientTables, M_IN_KM, MIN_IN_H};
use crate::models::{Metrics, Training};
use crate::reporter::InfoMessage;

impl Training {
    /// Distance in kilometers covered by the counted steps or strokes.
    pub fn distance_km(&self) -> f64 {
        let reading = self.reading();
        f64::from(reading.action_count) * self.kind().step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h. Swimming uses pool length and laps instead of strokes.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Training::Swimming {
                reading,
                pool_length_m,
                pool_laps,
            } => pool_length_m * f64::from(*pool_laps) / M_IN_KM / reading.duration_hours,
            _ => self.distance_km() / self.reading().duration_hours,
        }
    }

    /// Calories spent during the session, using the built-in coefficient tables.
    pub fn spent_calories(&self) -> f64 {
        self.spent_calories_with(&CoefficientTables::DEFAULT)
    }

    /// Calories spent during the session, using the given coefficient tables.
    pub fn spent_calories_with(&self, tables: &CoefficientTables) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Training::Running { reading } => {
                let c = tables.running;
                (c.speed_multiplier * speed - c.speed_shift) * reading.weight_kg / M_IN_KM
                    * reading.duration_hours
                    * MIN_IN_H
            }
            Training::SportsWalking { reading, height_cm } => {
                let c = tables.walking;
                let speed_height = floor_div(speed.powi(2), *height_cm);
                (c.weight_multiplier * reading.weight_kg
                    + speed_height * c.speed_height_multiplier * reading.weight_kg)
                    * (reading.duration_hours * MIN_IN_H)
            }
            Training::Swimming { reading, .. } => {
                let c = tables.swimming;
                (speed + c.speed_shift) * c.weight_multiplier * reading.weight_kg
            }
        }
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }

    /// Bundles the label, duration and metrics for reporting.
    pub fn summary(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().label(),
            self.reading().duration_hours,
            self.metrics(),
        )
    }
}

/// Floor division of the exact quotient `a / b`.
///
/// Works from the remainder so a quotient that rounds up to a whole number
/// (`1.0 / 0.1`) still floors to the value below it.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reading;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_running() {
        let training = Training::Running {
            reading: Reading::new(15000, 1.0, 75.0),
        };
        let metrics = training.metrics();
        assert!((metrics.distance_km - 9.75).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 9.75).abs() < EPS);
        assert!((metrics.calories - 699.75).abs() < EPS);
    }

    #[test]
    fn test_swimming_uses_pool_for_speed() {
        let training = Training::Swimming {
            reading: Reading::new(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_laps: 40,
        };
        let metrics = training.metrics();
        assert!((metrics.distance_km - 0.9936).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 1.0).abs() < EPS);
        assert!((metrics.calories - 336.0).abs() < EPS);
    }

    #[test]
    fn test_walking_floor_division() {
        let training = Training::SportsWalking {
            reading: Reading::new(9000, 1.0, 75.0),
            height_cm: 180.0,
        };
        let metrics = training.metrics();
        assert!((metrics.distance_km - 5.85).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 5.85).abs() < EPS);
        // 5.85^2 = 34.2225, floor(34.2225 / 180) = 0
        assert!((metrics.calories - 157.5).abs() < EPS);
    }

    #[test]
    fn test_walking_fast_enough_to_count_speed_term() {
        // 2 hours, 40000 steps: 26 km at 13 km/h, 169 / 100 floors to 1
        let training = Training::SportsWalking {
            reading: Reading::new(40000, 2.0, 70.0),
            height_cm: 100.0,
        };
        let expected = (0.035 * 70.0 + 1.0 * 0.029 * 70.0) * 120.0;
        assert!((training.mean_speed_kmh() - 13.0).abs() < EPS);
        assert!((training.spent_calories() - expected).abs() < EPS);
    }

    #[test]
    fn test_walking_quotient_rounding_up_still_floors() {
        // speed 1 km/h over height 0.1: 1.0 / 0.1 rounds to 10.0, the exact quotient floors to 9
        let training = Training::SportsWalking {
            reading: Reading::new(1000, 0.65, 75.0),
            height_cm: 0.1,
        };
        assert!((training.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((training.spent_calories() - 865.8).abs() < 1e-6);
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(169.0, 100.0), 1.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
    }

    #[test]
    fn test_custom_coefficient_tables() {
        let training = Training::Swimming {
            reading: Reading::new(720, 1.0, 80.0),
            pool_length_m: 25.0,
            pool_laps: 40,
        };
        let mut tables = CoefficientTables::DEFAULT;
        tables.swimming.weight_multiplier = 1.0;
        assert!((training.spent_calories_with(&tables) - 168.0).abs() < EPS);
        assert_eq!(
            training.spent_calories_with(&CoefficientTables::DEFAULT),
            training.spent_calories()
        );
    }

    #[test]
    fn test_duration_scales_speed() {
        let training = Training::Running {
            reading: Reading::new(15000, 0.5, 75.0),
        };
        assert!((training.distance_km() - 9.75).abs() < EPS);
        assert!((training.mean_speed_kmh() - 19.5).abs() < EPS);
    }

    #[test]
    fn test_summary_carries_label_and_duration() {
        let training = Training::Running {
            reading: Reading::new(15000, 1.0, 75.0),
        };
        let summary = training.summary();
        assert_eq!(summary.training_type, "Running");
        assert_eq!(summary.duration, 1.0);
        assert_eq!(summary.metrics, training.metrics());
    }
}
