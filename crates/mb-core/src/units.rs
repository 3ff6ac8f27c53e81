// mb-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Stress = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

/// Sheet thicknesses are entered in millimeters.
#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn as_mm(v: Length) -> f64 {
    use uom::si::length::millimeter;
    v.get::<millimeter>()
}

/// Strengths and stresses are worked in megapascals.
#[inline]
pub fn mpa(v: f64) -> Stress {
    use uom::si::pressure::megapascal;
    Stress::new::<megapascal>(v)
}

#[inline]
pub fn as_mpa(v: Stress) -> f64 {
    use uom::si::pressure::megapascal;
    v.get::<megapascal>()
}

/// Junction temperatures are entered in degrees Celsius.
#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn as_celsius(v: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    v.get::<degree_celsius>()
}

/// Dimensionless quantities (strain fractions, strength ratios).
#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn as_unitless(v: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    v.get::<ratio>()
}
