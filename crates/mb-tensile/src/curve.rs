//! The tensile-test model: run lifecycle and the per-tick state machine.

use crate::error::{TensileError, TensileResult};
use crate::phase::{
    CurveConstants, elastic_sample, gauge_width, hardening_sample, neck_ellipse, necking_sample,
};
use crate::plan::SamplingPlan;
use mb_core::Real;
use mb_rolling::{DerivedProperties, MaterialConstants};
use tracing::debug;

/// Where a run currently is. Phases are ordered and never revisited;
/// counters are phase-local.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Elastic { step: usize },
    Hardening { step: usize },
    Necking { step: usize },
    Complete,
}

/// Everything the animation collaborator needs from one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutput {
    /// Total strain of the just-computed sample
    pub total_strain: Real,
    /// Engineering stress (MPa), the value plotted on the curve
    pub engineering_stress: Real,
    /// True stress (MPa)
    pub true_stress: Real,
    /// Relative uniform gauge width
    pub gauge_width: Real,
    /// Neck ellipse width factor
    pub neck_width: Real,
    /// Neck ellipse height factor
    pub neck_height: Real,
    /// True exactly from the tick that computes the final necking sample
    pub done: bool,
}

/// Borrowed view of the accumulated curve, one entry per tick so far.
#[derive(Clone, Copy, Debug)]
pub struct CurveSamples<'a> {
    pub strain: &'a [Real],
    pub stress: &'a [Real],
}

/// Axis bounds for the collaborator's stress-strain plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    /// Strain axis extent (the fracture elongation)
    pub strain: Real,
    /// Stress axis extent (the ultimate strength, MPa)
    pub stress: Real,
}

struct RunSetup {
    constants: CurveConstants,
    plan: SamplingPlan,
}

/// Tensile-test model for one material.
///
/// Lifecycle: [`set_parameters`] derives the run's strengths from coldwork,
/// [`init_run`] sizes the sampling plan and clears state, then [`advance`]
/// is called once per animation tick until the output reports `done`.
///
/// [`set_parameters`]: Self::set_parameters
/// [`init_run`]: Self::init_run
/// [`advance`]: Self::advance
pub struct TensileCurveModel {
    material: MaterialConstants,
    props: Option<DerivedProperties>,
    run: Option<RunSetup>,
    phase: Phase,
    strain: Vec<Real>,
    stress: Vec<Real>,
    last: Option<TickOutput>,
}

impl TensileCurveModel {
    pub fn new(material: MaterialConstants) -> Self {
        Self {
            material,
            props: None,
            run: None,
            phase: Phase::Elastic { step: 0 },
            strain: Vec::new(),
            stress: Vec::new(),
            last: None,
        }
    }

    pub fn aluminum() -> Self {
        Self::new(MaterialConstants::ALUMINUM)
    }

    /// Derive the run's strength properties from percent coldwork.
    /// Invalidates any previously initialized run.
    pub fn set_parameters(&mut self, coldwork_pct: Real) -> TensileResult<DerivedProperties> {
        mb_core::ensure_finite(coldwork_pct, "coldwork_pct")?;
        if coldwork_pct < 0.0 {
            return Err(TensileError::InvalidArg {
                what: "coldwork_pct must be non-negative",
            });
        }
        let props = self.material.derive_properties(coldwork_pct);
        self.props = Some(props);
        self.run = None;
        Ok(props)
    }

    /// Size the sampling plan from the strength ratio and clear all run
    /// state. Returns the plot bounds for the collaborator's graph.
    pub fn init_run(&mut self) -> TensileResult<PlotBounds> {
        let props = self.props.ok_or(TensileError::NotParameterized)?;
        let plan = SamplingPlan::for_ratio(props.strength_ratio());
        debug!(
            ratio = props.strength_ratio(),
            elastic_points = plan.elastic_points,
            plastic_points = plan.plastic_points,
            "sized sampling plan"
        );
        self.run = Some(RunSetup {
            constants: CurveConstants::new(self.material.e, props),
            plan,
        });
        self.reset();
        Ok(PlotBounds {
            strain: props.el,
            stress: props.uts,
        })
    }

    /// Advance the run by exactly one sample.
    ///
    /// Appends `(total_strain, engineering_stress)` to the run's sequences
    /// and returns the tick output. After completion this is a no-op that
    /// returns the terminal output with `done` still true.
    pub fn advance(&mut self) -> TensileResult<TickOutput> {
        let run = self.run.as_ref().ok_or(TensileError::NotInitialized)?;
        let plan = run.plan;
        let c = &run.constants;

        let (sample, gauge_w, neck_w, next, done) = match self.phase {
            Phase::Elastic { step } => {
                let s = elastic_sample(c, step, plan.elastic_points);
                let w = gauge_width(s.total_strain);
                let next = if step + 1 < plan.elastic_points {
                    Phase::Elastic { step: step + 1 }
                } else {
                    Phase::Hardening { step: 0 }
                };
                (s, w, w, next, false)
            }
            Phase::Hardening { step } => {
                let s = hardening_sample(c, step, plan.plastic_points);
                let w = gauge_width(s.total_strain);
                let next = if step + 1 <= plan.necking_point {
                    Phase::Hardening { step: step + 1 }
                } else {
                    // Counter carries across the handover
                    Phase::Necking { step: step + 1 }
                };
                (s, w, w, next, false)
            }
            Phase::Necking { step } => {
                let s = necking_sample(c, step, plan.plastic_points);
                let w = gauge_width(s.total_strain);
                let n = w * (s.engineering_stress / s.true_stress);
                if step + 1 <= plan.plastic_points {
                    (s, w, n, Phase::Necking { step: step + 1 }, false)
                } else {
                    (s, w, n, Phase::Complete, true)
                }
            }
            Phase::Complete => {
                // Terminal no-op: the sequences stay as they are
                return self
                    .last
                    .ok_or(TensileError::InvalidArg {
                        what: "completed run has no terminal output",
                    });
            }
        };

        let (neck_width, neck_height) = neck_ellipse(gauge_w, neck_w);
        let out = TickOutput {
            total_strain: sample.total_strain,
            engineering_stress: sample.engineering_stress,
            true_stress: sample.true_stress,
            gauge_width: gauge_w,
            neck_width,
            neck_height,
            done,
        };

        self.strain.push(sample.total_strain);
        self.stress.push(sample.engineering_stress);
        self.phase = next;
        self.last = Some(out);
        Ok(out)
    }

    /// The accumulated stress-strain curve so far.
    pub fn curve(&self) -> CurveSamples<'_> {
        CurveSamples {
            strain: &self.strain,
            stress: &self.stress,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Clear the sequences and counters. Parameters and the sampling plan
    /// survive, so the next tick reproduces a fresh run's first sample.
    pub fn reset(&mut self) {
        self.strain.clear();
        self.stress.clear();
        self.phase = Phase::Elastic { step: 0 };
        self.last = None;
    }

    /// Fracture curvature magnitude for the display layer: the larger the
    /// elongation, the wider the fracture arc it draws.
    pub fn fracture_offset(&self) -> TensileResult<Real> {
        Ok(self.props.ok_or(TensileError::NotParameterized)?.el)
    }
}
