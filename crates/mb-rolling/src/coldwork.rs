//! Coldwork percentage from a rolling pass.
//!
//! The pure formula lives in [`compute_coldwork`]; the input policy (slider
//! range, swapping so the final thickness never exceeds the initial, the 90%
//! operating limit) lives in [`ThicknessInputs`]. The formula itself never
//! rejects: feeding it `tf > t0` is a caller contract violation and yields a
//! negative, meaningless percentage.

use crate::error::{RollingError, RollingResult};
use mb_core::units::{Length, as_mm};
use mb_core::{Real, round2};

/// Slider range for both thicknesses, in millimeters.
pub const THICKNESS_MIN_MM: Real = 1.0;
pub const THICKNESS_MAX_MM: Real = 15.0;

/// A pass reducing thickness by more than this refuses to start.
pub const COLDWORK_LIMIT_PCT: Real = 90.0;

/// Percent coldwork of a pass from initial thickness `t0` to final
/// thickness `tf`, rounded to two decimals.
///
/// Precondition: `tf <= t0`. This function only computes; range and limit
/// policy belong to [`ThicknessInputs`].
pub fn compute_coldwork(t0: Real, tf: Real) -> Real {
    round2((t0 - tf) / t0 * 100.0)
}

/// Validated thickness pair for one rolling pass.
///
/// Construction normalizes the inputs the way the workshop sliders do: if
/// the final thickness is dragged above the initial one, the pair is swapped
/// rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThicknessInputs {
    t0_mm: Real,
    tf_mm: Real,
}

impl ThicknessInputs {
    /// Build from raw slider values in millimeters.
    pub fn new(t0_mm: Real, tf_mm: Real) -> RollingResult<Self> {
        check_range(t0_mm, "initial thickness")?;
        check_range(tf_mm, "final thickness")?;

        // Swap instead of rejecting, matching the slider behavior
        let (t0_mm, tf_mm) = if tf_mm > t0_mm {
            (tf_mm, t0_mm)
        } else {
            (t0_mm, tf_mm)
        };
        Ok(Self { t0_mm, tf_mm })
    }

    /// Build from physical lengths.
    pub fn from_lengths(t0: Length, tf: Length) -> RollingResult<Self> {
        Self::new(as_mm(t0), as_mm(tf))
    }

    pub fn initial_mm(&self) -> Real {
        self.t0_mm
    }

    pub fn final_mm(&self) -> Real {
        self.tf_mm
    }

    /// Percent coldwork of the pass, unguarded.
    pub fn coldwork(&self) -> Real {
        compute_coldwork(self.t0_mm, self.tf_mm)
    }

    /// Percent coldwork, applying the operating limit: above
    /// [`COLDWORK_LIMIT_PCT`] the pass is an invalid configuration.
    pub fn checked_coldwork(&self) -> RollingResult<Real> {
        let cw = self.coldwork();
        if cw > COLDWORK_LIMIT_PCT {
            return Err(RollingError::ColdworkExceedsLimit {
                coldwork_pct: cw,
                limit: COLDWORK_LIMIT_PCT,
            });
        }
        Ok(cw)
    }
}

fn check_range(v_mm: Real, what: &'static str) -> RollingResult<()> {
    if !v_mm.is_finite() || v_mm < THICKNESS_MIN_MM || v_mm > THICKNESS_MAX_MM {
        return Err(RollingError::ThicknessOutOfRange {
            what,
            value: v_mm,
            min: THICKNESS_MIN_MM,
            max: THICKNESS_MAX_MM,
        });
    }
    Ok(())
}
