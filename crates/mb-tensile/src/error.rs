//! Error types for tensile-test simulation.

use thiserror::Error;

/// Errors encountered while driving a tensile-test run.
#[derive(Error, Debug)]
pub enum TensileError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Run parameters not set: call set_parameters first")]
    NotParameterized,

    #[error("Run not initialized: call init_run before advancing")]
    NotInitialized,

    #[error("Tick budget exceeded: no fracture within {max_ticks} ticks")]
    TickBudgetExceeded { max_ticks: usize },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type TensileResult<T> = Result<T, TensileError>;

impl From<mb_rolling::RollingError> for TensileError {
    fn from(e: mb_rolling::RollingError) -> Self {
        TensileError::Backend {
            message: e.to_string(),
        }
    }
}

impl From<mb_core::CoreError> for TensileError {
    fn from(e: mb_core::CoreError) -> Self {
        TensileError::Backend {
            message: e.to_string(),
        }
    }
}
