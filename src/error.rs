//! Error type for loading base metrics and exporting scenarios

use thiserror::Error;

/// Errors raised outside the projection arithmetic
///
/// The engine itself is total; these only come from configuration loading
/// and export encoding.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid number '{value}' for metric '{metric}'")]
    InvalidNumber { metric: String, value: String },

    #[error("unknown base metric '{0}'")]
    UnknownMetric(String),

    #[error("malformed base metric row at line {line}: expected metric and value")]
    MalformedRow { line: u64 },

    #[error("base metric '{0}' appears more than once")]
    DuplicateMetric(String),

    #[error("missing base metric '{0}'")]
    MissingMetric(&'static str),

    #[error("base metric '{metric}' must be finite and non-negative, got {value}")]
    InvalidMetric { metric: &'static str, value: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
