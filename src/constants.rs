//! Physical and mathematical constants.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Mathematical constants

pub const PI: fcn = std::f64::consts::PI;

// Physical constants

/// Atomic mass unit [kg].
pub const AMU: fcn = 1.660_539_066_6e-27;
/// Neutron mass [kg].
pub const M_NEUTRON: fcn = 1.674_927_498_04e-27;
/// Boltzmann constant [J/K].
pub const KBOLTZMANN: fcn = 1.380_649e-23;
/// Mean energy of the neutron born in a D-T fusion reaction [eV].
pub const E_DT_NEUTRON: fcn = 14.08e6;
/// Mean energy of the neutron born in a D-D fusion reaction [eV].
pub const E_DD_NEUTRON: fcn = 2.45e6;
/// Total energy released by a D-T fusion reaction [eV].
pub const E_DT_FUSION: fcn = 17.59e6;
/// Ratio of the summed reactant masses to the neutron mass for D-T fusion.
pub const DT_NEUTRON_MASS_RATIO: fcn = 5.0;

// Spectrum parametrizations

/// Watt spectrum coefficient `a` for thermal fission of U-235 [eV].
pub const WATT_U235_A: fcn = 0.988e6;
/// Watt spectrum coefficient `b` for thermal fission of U-235 [1/eV].
pub const WATT_U235_B: fcn = 2.249e-6;

// Unit conversion factors

/// Conversion factor from electron volts to joules.
pub const EV_TO_JOULE: fcn = 1.602_176_634e-19;
/// Conversion factor from kilo electron volts to electron volts.
pub const KEV_TO_EV: fcn = 1e3;
/// Conversion factor from mega electron volts to electron volts.
pub const MEV_TO_EV: fcn = 1e6;
