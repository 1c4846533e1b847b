//! International Standard Atmosphere and airspeed conversions.
//!
//! All speeds are in m/s, altitudes in m. Mach numbers are dimensionless,
//! which is what the speed-scheduling code relies on: a value in `(0, 1]`
//! is a Mach number, a value above that is a calibrated airspeed.

use super::constants::{
    AIR_GAS_CONSTANT, GAMMA, GRAVITY, ISA_LAPSE_RATE, ISA_SEA_LEVEL_DENSITY,
    ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP, ISA_TROPOPAUSE_ALT, ISA_TROPOPAUSE_TEMP,
};

/// ISA pressure [Pa], density [kg/m^3] and temperature [K] at altitude [m]
pub fn atmos(alt: f64) -> (f64, f64, f64) {
    let tropo_exp = -GRAVITY / (ISA_LAPSE_RATE * AIR_GAS_CONSTANT);

    if alt < ISA_TROPOPAUSE_ALT {
        let t = ISA_SEA_LEVEL_TEMP + ISA_LAPSE_RATE * alt;
        let p = ISA_SEA_LEVEL_PRESSURE * (t / ISA_SEA_LEVEL_TEMP).powf(tropo_exp);
        (p, p / (AIR_GAS_CONSTANT * t), t)
    } else {
        // Isothermal layer above the tropopause
        let t = ISA_TROPOPAUSE_TEMP;
        let p_tropo =
            ISA_SEA_LEVEL_PRESSURE * (t / ISA_SEA_LEVEL_TEMP).powf(tropo_exp);
        let p = p_tropo
            * (-GRAVITY * (alt - ISA_TROPOPAUSE_ALT) / (AIR_GAS_CONSTANT * t)).exp();
        (p, p / (AIR_GAS_CONSTANT * t), t)
    }
}

/// Local speed of sound [m/s]
#[inline]
pub fn speed_of_sound(alt: f64) -> f64 {
    let (_, _, t) = atmos(alt);
    (GAMMA * AIR_GAS_CONSTANT * t).sqrt()
}

/// Calibrated airspeed to true airspeed (compressible impact-pressure form)
pub fn cas2tas(cas: f64, alt: f64) -> f64 {
    let (p, rho, _) = atmos(alt);
    let qdyn = ISA_SEA_LEVEL_PRESSURE
        * ((1.0 + ISA_SEA_LEVEL_DENSITY * cas * cas / (7.0 * ISA_SEA_LEVEL_PRESSURE))
            .powf(3.5)
            - 1.0);
    (7.0 * p / rho * ((1.0 + qdyn / p).powf(2.0 / 7.0) - 1.0)).sqrt()
}

/// True airspeed to calibrated airspeed
pub fn tas2cas(tas: f64, alt: f64) -> f64 {
    let (p, rho, _) = atmos(alt);
    let qdyn = p * ((1.0 + rho * tas * tas / (7.0 * p)).powf(3.5) - 1.0);
    (7.0 * ISA_SEA_LEVEL_PRESSURE / ISA_SEA_LEVEL_DENSITY
        * ((1.0 + qdyn / ISA_SEA_LEVEL_PRESSURE).powf(2.0 / 7.0) - 1.0))
        .sqrt()
}

#[inline]
pub fn mach2tas(mach: f64, alt: f64) -> f64 {
    mach * speed_of_sound(alt)
}

#[inline]
pub fn tas2mach(tas: f64, alt: f64) -> f64 {
    tas / speed_of_sound(alt)
}

#[inline]
pub fn cas2mach(cas: f64, alt: f64) -> f64 {
    tas2mach(cas2tas(cas, alt), alt)
}

#[inline]
pub fn mach2cas(mach: f64, alt: f64) -> f64 {
    tas2cas(mach2tas(mach, alt), alt)
}

/// Interpret a speed intent as CAS or Mach and resolve all three forms.
///
/// Values above 1.0 are CAS [m/s], values in (0, 1] are Mach. Non-positive
/// values (constraint sentinels from external interfaces) resolve to zero
/// so downstream arithmetic stays finite.
pub fn casormach(spd: f64, alt: f64) -> (f64, f64, f64) {
    if spd > 1.0 {
        let tas = cas2tas(spd, alt);
        (tas, spd, tas2mach(tas, alt))
    } else if spd > 0.0 {
        let tas = mach2tas(spd, alt);
        (tas, tas2cas(tas, alt), spd)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// True airspeed implied by a CAS-or-Mach speed intent at the given altitude
#[inline]
pub fn casormach2tas(spd: f64, alt: f64) -> f64 {
    casormach(spd, alt).0
}
