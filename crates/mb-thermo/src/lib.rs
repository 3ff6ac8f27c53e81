//! Thermocouple emulator: Seebeck coefficient table and junction voltage.
//!
//! Provides:
//! - Line-oriented `name:coefficient` table parsing, with a built-in table
//!   of common metals embedded at compile time
//! - The fixed cold-junction reference (25 °C)
//! - Voltage from two Seebeck coefficients and the hot-junction temperature
//! - Reading assembly from table indices for the display collaborator

pub mod error;
pub mod table;
pub mod voltage;

pub use error::{ThermoError, ThermoResult};
pub use table::{MetalTable, SeebeckEntry};
pub use voltage::{COLD_JUNCTION_C, ThermocoupleReading, thermocouple_voltage};
