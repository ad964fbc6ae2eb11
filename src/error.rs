//! Error types.
//!
//! Solvers never fail on well-formed input. The errors below cover the
//! caller-side contract (matrix shape, assignment length, configuration
//! ranges) and the I/O of the experiment report.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum IsingError {
    #[error("dimension mismatch: matrix has dimension {expected}, assignment has length {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("matrix data has {actual} entries, expected {expected}")]
    BadLength { expected: usize, actual: usize },

    #[error("dimension {dimension} exceeds the enumerable maximum of {max}")]
    DimensionTooLarge { dimension: usize, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the crate.
pub type IsingResult<T> = Result<T, IsingError>;
