//! Junction voltage from Seebeck coefficients.

use crate::error::ThermoResult;
use crate::table::MetalTable;
use mb_core::Real;
use mb_core::units::{Temperature, as_celsius};
use serde::Serialize;

/// Fixed cold-junction reference temperature (°C).
pub const COLD_JUNCTION_C: Real = 25.0;

/// Voltage across the thermocouple for two Seebeck coefficients (µV/°C)
/// and hot-junction temperature `t1_c` (°C), against the fixed 25 °C cold
/// junction. Pure; the sign convention follows the lead wiring of the
/// bench setup.
pub fn thermocouple_voltage(seebeck_1: Real, seebeck_2: Real, t1_c: Real) -> Real {
    -(seebeck_1 - seebeck_2) * (t1_c - COLD_JUNCTION_C)
}

/// What the display collaborator shows for one metal pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermocoupleReading {
    pub metal_1: String,
    pub metal_2: String,
    /// Hot-junction temperature (°C)
    pub t1_c: Real,
    pub voltage: Real,
}

impl MetalTable {
    /// Assemble a reading from the selection-list indices the display
    /// layer supplies.
    pub fn reading(&self, metal_1: usize, metal_2: usize, t1_c: Real) -> ThermoResult<ThermocoupleReading> {
        let first = self.get(metal_1)?;
        let second = self.get(metal_2)?;
        Ok(ThermocoupleReading {
            metal_1: first.name.clone(),
            metal_2: second.name.clone(),
            t1_c,
            voltage: thermocouple_voltage(first.coefficient, second.coefficient, t1_c),
        })
    }

    /// As [`MetalTable::reading`], taking the hot-junction temperature as
    /// a physical quantity.
    pub fn reading_at(
        &self,
        metal_1: usize,
        metal_2: usize,
        t1: Temperature,
    ) -> ThermoResult<ThermocoupleReading> {
        self.reading(metal_1, metal_2, as_celsius(t1))
    }
}
