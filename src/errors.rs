//! Error types for netmetrics-rs.

use crate::algorithms::dispatch::Method;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// The analysis configuration or the input data record is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested metric name is not in the method table.
    #[error("unsupported connectivity metric '{0}'")]
    UnsupportedMetric(String),

    /// The metric is in the method table but has no computation routine yet.
    #[error("metric '{0}' is recognized but not yet implemented")]
    NotImplemented(Method),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
