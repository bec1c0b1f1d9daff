//! Human-readable workout summaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Metrics;

/// Information message about a finished training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub metrics: Metrics,
}

impl InfoMessage {
    pub fn new(training_type: impl Into<String>, duration: f64, metrics: Metrics) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            metrics,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories,
        )
    }
}

/// Formats a single report line.
pub fn render(label: &str, duration: f64, metrics: &Metrics) -> String {
    InfoMessage::new(label, duration, *metrics).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> Metrics {
        Metrics {
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_render_template() {
        let line = render("Running", 1.0, &sample_metrics());
        assert_eq!(
            line,
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_render_rounds_to_three_places() {
        let metrics = Metrics {
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        };
        let line = render("Swimming", 1.0, &metrics);
        assert!(line.contains("Дистанция: 0.994 км;"));
        assert!(line.ends_with("Потрачено ккал: 336.000."));
    }

    #[test]
    fn test_render_is_idempotent() {
        let metrics = sample_metrics();
        assert_eq!(
            render("Running", 1.0, &metrics),
            render("Running", 1.0, &metrics)
        );
    }

    #[test]
    fn test_display_matches_render() {
        let message = InfoMessage::new("Running", 1.0, sample_metrics());
        assert_eq!(message.to_string(), render("Running", 1.0, &sample_metrics()));
    }
}
