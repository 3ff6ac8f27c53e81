//! Cold-rolling pass: coldwork percentage and material strength response.
//!
//! Provides:
//! - Thickness input policy (slider range, initial >= final normalization)
//! - Coldwork percentage computation with the 90% operating limit
//! - Coldwork-response material constants (aluminum defaults, YAML-loadable)
//! - Derived per-run strengths (yield, ultimate, fracture elongation)

pub mod coldwork;
pub mod error;
pub mod material;

pub use coldwork::{
    COLDWORK_LIMIT_PCT, THICKNESS_MAX_MM, THICKNESS_MIN_MM, ThicknessInputs, compute_coldwork,
};
pub use error::{RollingError, RollingResult};
pub use material::{DerivedProperties, MaterialConstants};
