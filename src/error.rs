//! Ошибки библиотеки

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Датасет без строк
    #[error("Empty dataset")]
    EmptyDataset,

    /// Меньше двух столбцов (признаки + метка)
    #[error("Dataset must have at least 2 columns, got {ncols}")]
    TooFewColumns { ncols: usize },

    /// Строки разной длины
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Normalizer not fitted")]
    NotFitted,

    /// Ширина таблицы не совпадает с обученной
    #[error("Dataset has {actual} columns, normalizer was fitted on {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Запрошенный класс отсутствует в датасете
    #[error("Class pool for label {label} is empty")]
    EmptyPool { label: u8 },

    /// Выборка без возвращения больше, чем сам пул
    #[error("Requested {requested} rows without replacement from class {label} pool of {available}")]
    InsufficientPool {
        label: u8,
        requested: usize,
        available: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Нечисловое поле в CSV
    #[error("Failed to parse numeric field at line {line}: {source}")]
    ParseFloat {
        line: usize,
        source: std::num::ParseFloatError,
    },
}
