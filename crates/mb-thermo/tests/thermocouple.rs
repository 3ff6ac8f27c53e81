//! Integration test: the thermocouple page flow, selection to reading.

use mb_thermo::{COLD_JUNCTION_C, MetalTable, thermocouple_voltage};
use proptest::prelude::*;

#[test]
fn default_selection_produces_a_reading() {
    // The page selects the first metal in both lists on entry
    let table = MetalTable::builtin().unwrap();
    let reading = table.reading(0, 0, 100.0).unwrap();
    assert_eq!(reading.metal_1, reading.metal_2);
    assert_eq!(reading.voltage, 0.0);
}

#[test]
fn every_builtin_pairing_is_readable() {
    let table = MetalTable::builtin().unwrap();
    for i in 0..table.len() {
        for j in 0..table.len() {
            let reading = table.reading(i, j, 250.0).unwrap();
            assert!(reading.voltage.is_finite());
        }
    }
}

proptest! {
    #[test]
    fn voltage_is_linear_in_temperature(
        s1 in -80.0_f64..80.0,
        s2 in -80.0_f64..80.0,
        t in -50.0_f64..500.0,
    ) {
        let v = thermocouple_voltage(s1, s2, t);
        let expected = -(s1 - s2) * (t - COLD_JUNCTION_C);
        prop_assert_eq!(v, expected);

        // Doubling the temperature delta doubles the voltage
        let t2 = COLD_JUNCTION_C + 2.0 * (t - COLD_JUNCTION_C);
        let v2 = thermocouple_voltage(s1, s2, t2);
        prop_assert!((v2 - 2.0 * v).abs() <= 1e-9 * v.abs().max(1.0));
    }
}
