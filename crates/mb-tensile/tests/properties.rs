//! Property tests across the full coldwork operating range.

use mb_tensile::{SamplingPlan, TensileCurveModel, run_to_fracture};
use proptest::prelude::*;

proptest! {
    #[test]
    fn run_length_matches_plan(cw in 0.0_f64..=90.0) {
        let mut model = TensileCurveModel::aluminum();
        let props = model.set_parameters(cw).unwrap();
        model.init_run().unwrap();
        let record = run_to_fracture(&mut model, 1_000).unwrap();
        let plan = SamplingPlan::for_ratio(props.strength_ratio());
        prop_assert_eq!(record.ticks, plan.total_ticks());
    }

    #[test]
    fn elastic_ramp_strain_is_strictly_monotonic(cw in 0.0_f64..=90.0) {
        let mut model = TensileCurveModel::aluminum();
        let props = model.set_parameters(cw).unwrap();
        model.init_run().unwrap();
        let plan = SamplingPlan::for_ratio(props.strength_ratio());

        let mut prev = model.advance().unwrap().total_strain;
        for _ in 1..plan.elastic_points {
            let strain = model.advance().unwrap().total_strain;
            prop_assert!(strain > prev);
            prev = strain;
        }
    }

    #[test]
    fn stress_stays_within_physical_bounds(cw in 0.0_f64..=90.0) {
        let mut model = TensileCurveModel::aluminum();
        let props = model.set_parameters(cw).unwrap();
        model.init_run().unwrap();
        let record = run_to_fracture(&mut model, 1_000).unwrap();
        for &s in &record.stress {
            prop_assert!(s >= 0.0);
            prop_assert!(s <= props.uts);
        }
    }
}
