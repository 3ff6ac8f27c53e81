//! Sampling plans: how many ticks each region of the curve gets.
//!
//! A flat curve (UTS close to YS) spends fewer ticks in the plastic region
//! so the animation does not crawl through visually identical samples;
//! a strongly hardening curve gets the opposite split.

use mb_core::Real;

/// Tick budget for one run, fixed at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingPlan {
    /// Samples in the elastic ramp
    pub elastic_points: usize,
    /// Samples across strain hardening and necking combined
    pub plastic_points: usize,
    /// Plastic-region index at which hardening hands over to necking
    pub necking_point: usize,
}

impl SamplingPlan {
    /// Choose a plan from the UTS/YS strength ratio. Comparisons are
    /// strict: a ratio of exactly 1.5 gets the 40/80 split.
    pub fn for_ratio(ratio: Real) -> Self {
        let (elastic_points, plastic_points) = if ratio > 1.5 {
            (20, 100)
        } else if ratio > 1.3 {
            (40, 80)
        } else {
            (60, 40)
        };
        Self {
            elastic_points,
            plastic_points,
            necking_point: (plastic_points as Real * 0.60) as usize,
        }
    }

    /// Ticks from a fresh run to `done`, inclusive of the fracture tick.
    pub fn total_ticks(&self) -> usize {
        self.elastic_points + self.plastic_points + 1
    }
}
