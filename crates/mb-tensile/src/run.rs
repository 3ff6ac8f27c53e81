//! Headless run driver.
//!
//! The windowed workshop paces ticks off an animation timer; tests and
//! batch callers use this driver instead, which ticks the model to
//! fracture under a step budget.

use crate::curve::{TensileCurveModel, TickOutput};
use crate::error::{TensileError, TensileResult};
use mb_core::Real;
use tracing::info;

/// Record of a completed run.
#[derive(Clone, Debug)]
pub struct RunRecord {
    /// Total strain, one entry per tick
    pub strain: Vec<Real>,
    /// Engineering stress (MPa), one entry per tick
    pub stress: Vec<Real>,
    /// Ticks taken to reach fracture
    pub ticks: usize,
    /// Output of the fracture tick
    pub final_tick: TickOutput,
}

/// Tick the model until it reports `done`.
///
/// `max_ticks` is a safety limit; the model must already be parameterized
/// and initialized.
pub fn run_to_fracture(model: &mut TensileCurveModel, max_ticks: usize) -> TensileResult<RunRecord> {
    if max_ticks == 0 {
        return Err(TensileError::InvalidArg {
            what: "max_ticks must be positive",
        });
    }

    let mut ticks = 0;
    loop {
        let out = model.advance()?;
        ticks += 1;
        if out.done {
            info!(ticks, final_strain = out.total_strain, "run reached fracture");
            let samples = model.curve();
            return Ok(RunRecord {
                strain: samples.strain.to_vec(),
                stress: samples.stress.to_vec(),
                ticks,
                final_tick: out,
            });
        }
        if ticks >= max_ticks {
            return Err(TensileError::TickBudgetExceeded { max_ticks });
        }
    }
}
