// sc-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, Energy as UomEnergy, Length as UomLength,
    MagneticFluxDensity as UomMagneticFluxDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Current = UomElectricCurrent;
pub type Energy = UomEnergy;
pub type FluxDensity = UomMagneticFluxDensity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn tesla(v: f64) -> FluxDensity {
    use uom::si::magnetic_flux_density::tesla;
    FluxDensity::new::<tesla>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn joule(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn amp(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

pub mod constants {
    /// Vacuum permeability [H/m].
    pub const MU0: f64 = 1.256_637_061_435_917_2e-6;
}
