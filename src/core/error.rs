use std::path::PathBuf;

use thiserror::Error;

/// Rejected launch input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("distance must be positive, got {0} m")]
    NonPositiveDistance(f64),
    #[error("launch angle must lie within 0..=90 degrees, got {0}")]
    AngleOutOfRange(f64),
    #[error("velocity cannot be negative, got {0} m/s")]
    NegativeVelocity(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read scene config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scene config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot backend failed: {0}")]
    Backend(String),
    #[error("unsupported plot format '{0}', expected .svg or .png")]
    UnsupportedFormat(String),
}
