//! Thermocouple errors.

use thiserror::Error;

/// Result type for thermocouple operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// A table row that does not parse. Fatal at load time: the table is
    /// all-or-nothing, never partially loaded.
    #[error("Malformed table row at line {line}: {reason} ({row:?})")]
    DataFormat {
        line: usize,
        reason: &'static str,
        row: String,
    },

    /// Metal index outside the loaded table.
    #[error("Metal index out of bounds: {index} (table has {len} entries)")]
    MetalIndexOob { index: usize, len: usize },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::DataFormat {
            line: 3,
            reason: "missing ':' separator",
            row: "Copper 6.5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("Copper"));
    }
}
