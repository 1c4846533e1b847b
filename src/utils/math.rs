use std::f64::consts::PI;

use super::constants::{EARTH_RADIUS, NM};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into (-180, 180]
pub fn normalize_180(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Great-circle initial bearing [deg] and haversine distance [m]
/// from (lat1, lon1) to (lat2, lon2), both in degrees.
pub fn qdr_dist(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let phi1 = deg_to_rad(lat1);
    let phi2 = deg_to_rad(lat2);
    let dlambda = deg_to_rad(lon2 - lon1);

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    let qdr = rad_to_deg(y.atan2(x));

    let dphi = phi2 - phi1;
    let a = (0.5 * dphi).sin().powi(2)
        + phi1.cos() * phi2.cos() * (0.5 * dlambda).sin().powi(2);
    let dist = 2.0 * EARTH_RADIUS * a.sqrt().min(1.0).asin();

    (qdr, dist)
}

/// Flat-earth distance [m]: one degree of latitude is 60 nm, longitude
/// scaled by cos(latitude) of the first point. Cheap enough to run for
/// the whole fleet every guidance cycle.
pub fn flat_earth_dist(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1) * deg_to_rad(lat1).cos();
    60.0 * NM * (dlat * dlat + dlon * dlon).sqrt()
}
