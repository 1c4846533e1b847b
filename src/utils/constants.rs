// Unit conversions (SI base units everywhere in the crate)
pub const FT: f64 = 0.3048; // m
pub const NM: f64 = 1852.0; // m
pub const KTS: f64 = 0.514444; // m/s
pub const FPM: f64 = FT / 60.0; // m/s

// Physical constants
pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_GAS_CONSTANT: f64 = 287.05287; // J/(kg·K)
pub const GAMMA: f64 = 1.4; // ratio of specific heats for air

pub const EARTH_RADIUS: f64 = 6371000.0; // m, mean

// International Standard Atmosphere
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const ISA_LAPSE_RATE: f64 = -0.0065; // K/m
pub const ISA_TROPOPAUSE_ALT: f64 = 11000.0; // m
pub const ISA_TROPOPAUSE_TEMP: f64 = 216.65; // K

// Guidance sentinels shared with the external route/waypoint interface
pub const NO_VNAV_TRIGGER: f64 = -999.0; // dist2vs: never start a vertical maneuver
pub const FORCE_VNAV_TRIGGER: f64 = 99999.0 * NM; // dist2vs: always due (climb case)

// Guard circle used once LNAV is off and turn distance may be zero (0.1 nm)
pub const WP_GUARD_DIST: f64 = 185.2; // m

// Waypoint switch circle for flyover waypoints
pub const FLYOVER_DIST: f64 = 40.0; // m
