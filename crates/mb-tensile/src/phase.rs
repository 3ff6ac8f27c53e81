//! Per-phase stress and strain formulas.
//!
//! Each formula is a free function over [`CurveConstants`] so the three
//! regions of the curve can be checked independently of the tick machinery.
//!
//! In the necking region the engineering stress follows a shifted exponent
//! (`exp((p - 1.2*el)/(el/6))`, rising toward fracture) while the true
//! stress keeps the hardening-region exponent. That asymmetry is the
//! intended behavior: it is what produces the visible neck in the
//! animation. Do not unify the two exponents.

use mb_core::Real;
use mb_rolling::DerivedProperties;

/// Per-run curve constants, fixed once at initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveConstants {
    /// Elastic modulus (MPa)
    pub e: Real,
    /// Yield strength (MPa)
    pub ys: Real,
    /// Ultimate tensile strength (MPa)
    pub uts: Real,
    /// Fracture elongation (strain fraction)
    pub el: Real,
    /// Engineering-stress exponent shift, 1.2 * el
    pub el_shift: Real,
    /// Exponent scale, el / 6
    pub el_scale: Real,
    /// UTS - YS
    pub strength_gap: Real,
}

impl CurveConstants {
    pub fn new(e: Real, props: DerivedProperties) -> Self {
        Self {
            e,
            ys: props.ys,
            uts: props.uts,
            el: props.el,
            el_shift: 1.2 * props.el,
            el_scale: props.el / 6.0,
            strength_gap: props.uts - props.ys,
        }
    }
}

/// One sample of the curve before geometry factors are attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    pub engineering_stress: Real,
    pub true_stress: Real,
    pub total_strain: Real,
}

/// Elastic ramp, `0 <= step < n1`: linear to yield, true stress equals
/// engineering stress under the small-strain assumption.
pub fn elastic_sample(c: &CurveConstants, step: usize, n1: usize) -> PhaseSample {
    let stress = c.ys * step as Real / n1 as Real;
    PhaseSample {
        engineering_stress: stress,
        true_stress: stress,
        total_strain: stress / c.e,
    }
}

/// Strain hardening, `0 <= step <= necking_point`: exponential saturation
/// from yield toward ultimate strength.
pub fn hardening_sample(c: &CurveConstants, step: usize, n2: usize) -> PhaseSample {
    let plastic_strain = c.el * step as Real / n2 as Real;
    let stress = c.uts - c.strength_gap * (-plastic_strain / c.el_scale).exp();
    PhaseSample {
        engineering_stress: stress,
        true_stress: stress,
        total_strain: stress / c.e + plastic_strain,
    }
}

/// Necking, `necking_point < step <= n2`: engineering stress falls away on
/// the shifted exponent while true stress continues the hardening form.
pub fn necking_sample(c: &CurveConstants, step: usize, n2: usize) -> PhaseSample {
    let plastic_strain = c.el * step as Real / n2 as Real;
    let engineering_stress =
        c.uts - c.strength_gap * ((plastic_strain - c.el_shift) / c.el_scale).exp();
    let true_stress = c.uts - c.strength_gap * (-plastic_strain / c.el_scale).exp();
    PhaseSample {
        engineering_stress,
        true_stress,
        total_strain: engineering_stress / c.e + plastic_strain,
    }
}

/// Relative uniform gauge width at a given total strain.
pub fn gauge_width(total_strain: Real) -> Real {
    (-(1.0 + total_strain).ln()).exp()
}

/// Neck ellipse dimensions from the uniform and remaining-neck width
/// factors. Zero while the gauge is still uniform.
pub fn neck_ellipse(gauge_w: Real, neck_w: Real) -> (Real, Real) {
    let width = (gauge_w - neck_w) * 1.5;
    (width, 5.0 * width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_rolling::MaterialConstants;

    fn aluminum_constants(cw: Real) -> CurveConstants {
        let m = MaterialConstants::ALUMINUM;
        CurveConstants::new(m.e, m.derive_properties(cw))
    }

    #[test]
    fn elastic_ramp_is_linear_to_yield() {
        let c = aluminum_constants(0.0);
        let s = elastic_sample(&c, 10, 20);
        assert!((s.engineering_stress - c.ys / 2.0).abs() < 1e-12);
        assert_eq!(s.engineering_stress, s.true_stress);
        assert!((s.total_strain - s.engineering_stress / c.e).abs() < 1e-15);
    }

    #[test]
    fn hardening_starts_at_yield_and_saturates_toward_uts() {
        let c = aluminum_constants(0.0);
        let first = hardening_sample(&c, 0, 100);
        // exp(0) = 1 puts the first hardening sample exactly at yield
        assert!((first.engineering_stress - c.ys).abs() < 1e-12);

        let late = hardening_sample(&c, 60, 100);
        assert!(late.engineering_stress > first.engineering_stress);
        assert!(late.engineering_stress < c.uts);
    }

    #[test]
    fn necking_true_stress_exceeds_engineering_stress() {
        let c = aluminum_constants(0.0);
        for step in 61..=100 {
            let s = necking_sample(&c, step, 100);
            assert!(
                s.true_stress > s.engineering_stress,
                "step {step}: true {} <= engineering {}",
                s.true_stress,
                s.engineering_stress
            );
        }
    }

    #[test]
    fn necking_engineering_stress_decreases() {
        let c = aluminum_constants(0.0);
        let mut prev = necking_sample(&c, 61, 100).engineering_stress;
        for step in 62..=100 {
            let s = necking_sample(&c, step, 100).engineering_stress;
            assert!(s < prev, "step {step} did not drop");
            prev = s;
        }
    }

    #[test]
    fn gauge_width_shrinks_with_strain() {
        assert!((gauge_width(0.0) - 1.0).abs() < 1e-15);
        assert!(gauge_width(0.1) < 1.0);
        assert!(gauge_width(0.2) < gauge_width(0.1));
    }

    #[test]
    fn neck_ellipse_zero_for_uniform_gauge() {
        let (w, h) = neck_ellipse(0.9, 0.9);
        assert_eq!(w, 0.0);
        assert_eq!(h, 0.0);

        let (w, h) = neck_ellipse(0.9, 0.8);
        assert!((w - 0.15).abs() < 1e-12);
        assert!((h - 5.0 * w).abs() < 1e-12);
    }
}
