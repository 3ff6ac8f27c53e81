//! Tick-driven tensile-test simulation.
//!
//! Provides:
//! - Sampling plans sized from the UTS/YS strength ratio
//! - The three-phase stress-strain state machine (elastic ramp, strain
//!   hardening, necking) advanced one sample per tick
//! - Gauge and neck geometry factors for the animation collaborator
//! - A bounded headless driver for tests and batch use
//!
//! The model owns all run state; the display layer only calls [`advance`]
//! once per animation frame and draws what comes back.
//!
//! [`advance`]: TensileCurveModel::advance

pub mod curve;
pub mod error;
pub mod phase;
pub mod plan;
pub mod run;

pub use curve::{CurveSamples, Phase, PlotBounds, TensileCurveModel, TickOutput};
pub use error::{TensileError, TensileResult};
pub use phase::{CurveConstants, PhaseSample};
pub use plan::SamplingPlan;
pub use run::{RunRecord, run_to_fracture};
