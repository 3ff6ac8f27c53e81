//! Coldwork-response constants and derived per-run strengths.
//!
//! Strengths saturate exponentially with coldwork: both yield and ultimate
//! strength rise from their annealed values toward a work-hardened plateau
//! with the same characteristic coldwork `cw_c`, while fracture elongation
//! falls off as `1 / (m_el * cw + c_el)`.

use crate::error::{RollingError, RollingResult};
use mb_core::Real;
use mb_core::units::{Ratio, Stress, mpa, unitless};
use serde::{Deserialize, Serialize};

/// Empirical coldwork-response constants for one alloy.
///
/// Strengths in MPa, elongation constants unitless. The defaults describe a
/// commercially pure aluminum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialConstants {
    /// Elastic modulus (MPa)
    pub e: Real,
    /// Annealed yield strength (MPa)
    pub ys_0: Real,
    /// Fully work-hardened yield strength (MPa)
    pub ys_inf: Real,
    /// Characteristic coldwork for strength saturation (%)
    pub cw_c: Real,
    /// Annealed ultimate tensile strength (MPa)
    pub uts_0: Real,
    /// Fully work-hardened ultimate tensile strength (MPa)
    pub uts_inf: Real,
    /// Elongation falloff slope (1/%)
    pub m_el: Real,
    /// Elongation falloff intercept
    pub c_el: Real,
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self::ALUMINUM
    }
}

impl MaterialConstants {
    /// Aluminum constants used by the workshop.
    pub const ALUMINUM: Self = Self {
        e: 69_000.0,
        ys_0: 60.0,
        ys_inf: 220.0,
        cw_c: 45.0,
        uts_0: 110.0,
        uts_inf: 223.0,
        m_el: 0.0045,
        c_el: 0.01,
    };

    /// Load constants from a YAML document.
    pub fn from_yaml_str(s: &str) -> RollingResult<Self> {
        let constants: Self = serde_yaml::from_str(s)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> RollingResult<()> {
        if self.e <= 0.0 {
            return Err(RollingError::InvalidArg {
                what: "elastic modulus must be positive",
            });
        }
        if self.ys_0 <= 0.0 || self.ys_inf < self.ys_0 {
            return Err(RollingError::InvalidArg {
                what: "yield strengths must satisfy 0 < ys_0 <= ys_inf",
            });
        }
        if self.uts_0 <= 0.0 || self.uts_inf < self.uts_0 {
            return Err(RollingError::InvalidArg {
                what: "ultimate strengths must satisfy 0 < uts_0 <= uts_inf",
            });
        }
        if self.cw_c <= 0.0 {
            return Err(RollingError::InvalidArg {
                what: "characteristic coldwork must be positive",
            });
        }
        if self.m_el <= 0.0 || self.c_el <= 0.0 {
            return Err(RollingError::InvalidArg {
                what: "elongation constants must be positive",
            });
        }
        Ok(())
    }

    /// Strengths and fracture elongation at the given percent coldwork.
    ///
    /// Computed once per simulation run and held fixed for its duration.
    pub fn derive_properties(&self, coldwork_pct: Real) -> DerivedProperties {
        let decay = (-coldwork_pct / self.cw_c).exp();
        let ys = self.ys_inf - (self.ys_inf - self.ys_0) * decay;
        let uts = self.uts_inf - (self.uts_inf - self.uts_0) * decay;
        // Elongation enters the curve math as a fraction, not a percent
        let el = (1.0 / (self.m_el * coldwork_pct + self.c_el)) / 100.0;
        DerivedProperties { ys, uts, el }
    }
}

/// Per-run strength properties derived from coldwork. Immutable for the
/// duration of a tensile-test run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    /// Yield strength (MPa)
    pub ys: Real,
    /// Ultimate tensile strength (MPa)
    pub uts: Real,
    /// Fracture elongation (strain fraction)
    pub el: Real,
}

impl DerivedProperties {
    /// UTS/YS ratio, which sets how sharply the plastic region curves.
    pub fn strength_ratio(&self) -> Real {
        self.uts / self.ys
    }

    pub fn ys_stress(&self) -> Stress {
        mpa(self.ys)
    }

    pub fn uts_stress(&self) -> Stress {
        mpa(self.uts)
    }

    /// [`strength_ratio`] as a dimensionless quantity.
    ///
    /// [`strength_ratio`]: Self::strength_ratio
    pub fn strength_ratio_quantity(&self) -> Ratio {
        unitless(self.strength_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annealed_properties_at_zero_coldwork() {
        // exp(0) = 1 collapses the saturation terms exactly
        let props = MaterialConstants::ALUMINUM.derive_properties(0.0);
        assert_eq!(props.ys, 60.0);
        assert_eq!(props.uts, 110.0);
        assert!((props.el - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fifty_percent_coldwork_strengths() {
        let props = MaterialConstants::ALUMINUM.derive_properties(50.0);
        let decay = (-50.0_f64 / 45.0).exp();
        assert!((props.ys - (220.0 - 160.0 * decay)).abs() < 1e-9);
        assert!((props.uts - (223.0 - 113.0 * decay)).abs() < 1e-9);
        assert!((props.el - (1.0 / 0.235) / 100.0).abs() < 1e-12);
    }

    #[test]
    fn strengths_as_physical_quantities() {
        use mb_core::units::{as_mpa, as_unitless};
        let props = MaterialConstants::ALUMINUM.derive_properties(0.0);
        assert!((as_mpa(props.ys_stress()) - 60.0).abs() < 1e-9);
        assert!((as_mpa(props.uts_stress()) - 110.0).abs() < 1e-9);
        assert!((as_unitless(props.strength_ratio_quantity()) - 110.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn strength_rises_and_elongation_falls_with_coldwork() {
        let m = MaterialConstants::ALUMINUM;
        let mut prev = m.derive_properties(0.0);
        for cw in [10.0, 25.0, 50.0, 75.0, 90.0] {
            let props = m.derive_properties(cw);
            assert!(props.ys > prev.ys);
            assert!(props.uts > prev.uts);
            assert!(props.el < prev.el);
            prev = props;
        }
    }

    #[test]
    fn yaml_round_trip() {
        let yaml = "
e: 200000.0
ys_0: 250.0
ys_inf: 600.0
cw_c: 30.0
uts_0: 400.0
uts_inf: 700.0
m_el: 0.006
c_el: 0.02
";
        let steel = MaterialConstants::from_yaml_str(yaml).unwrap();
        assert_eq!(steel.e, 200_000.0);
        assert_eq!(steel.ys_inf, 600.0);
    }

    #[test]
    fn yaml_rejects_nonsense_constants() {
        let yaml = "
e: -1.0
ys_0: 60.0
ys_inf: 220.0
cw_c: 45.0
uts_0: 110.0
uts_inf: 223.0
m_el: 0.0045
c_el: 0.01
";
        assert!(matches!(
            MaterialConstants::from_yaml_str(yaml),
            Err(RollingError::InvalidArg { .. })
        ));
    }
}
