//! Error types in clusterviz
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a selected field could not be read as a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldValueError {
    #[error("field is missing")]
    Missing,
    #[error("value is null")]
    Null,
    #[error("`{0}` is not a number")]
    NotNumeric(String),
    #[error("{0} is not finite")]
    NonFinite(f64),
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid value for field `{field}` in row {row}: {reason}")]
    InvalidFieldValue {
        row: usize,
        field: String,
        #[source]
        reason: FieldValueError,
    },
    #[error("{labels} cluster labels cannot be written onto {rows} rows")]
    LabelLengthMismatch { labels: usize, rows: usize },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
