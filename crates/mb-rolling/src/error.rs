//! Cold-rolling errors.

use thiserror::Error;

/// Result type for rolling-pass operations.
pub type RollingResult<T> = Result<T, RollingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollingError {
    /// Thickness outside the configured slider range.
    #[error("Thickness out of range for {what}: {value} mm (allowed {min}..={max} mm)")]
    ThicknessOutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Coldwork above the operating limit; the pass must refuse to run.
    #[error("Coldwork cannot be greater than {limit}% (got {coldwork_pct}%)")]
    ColdworkExceedsLimit { coldwork_pct: f64, limit: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Material configuration could not be parsed.
    #[error("Material config error: {message}")]
    Config { message: String },
}

impl From<serde_yaml::Error> for RollingError {
    fn from(e: serde_yaml::Error) -> Self {
        RollingError::Config {
            message: e.to_string(),
        }
    }
}
