use thiserror::Error;

use crate::models::ActivityKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error(
        "Неизвестный тип тренировки: \"{code}\". Допустимые значения: \"{allowed}\".",
        allowed = ActivityKind::allowed_codes()
    )]
    UnknownActivityCode { code: String },

    #[error("Тренировка {code} ожидает {expected} значений, получено {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Поле {field} должно быть целым неотрицательным числом, получено {value}")]
    NotAWholeNumber { field: &'static str, value: f64 },

    #[error("Длительность должна быть конечной и ненулевой, получено {0}")]
    InvalidDuration(f64),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
