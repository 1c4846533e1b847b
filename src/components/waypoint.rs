use crate::utils::constants::{FLYOVER_DIST, GRAVITY, NM, WP_GUARD_DIST};
use crate::utils::math::{deg_to_rad, normalize_180};

/// Active-waypoint records for the whole fleet, index-aligned with
/// [`FleetState`](crate::components::FleetState).
///
/// `spd` and `next_qdr` use `Option` where the original wire format uses
/// negative sentinels: `None` means no speed constraint / no known
/// next-leg bearing.
#[derive(Debug, Clone, Default)]
pub struct ActiveWaypoints {
    pub lat: Vec<f64>, // [deg]
    pub lon: Vec<f64>, // [deg]
    /// Next altitude constraint target [m]
    pub nextaltco: Vec<f64>,
    /// Speed constraint at this waypoint (CAS [m/s] or Mach)
    pub spd: Vec<Option<f64>>,
    /// Required vertical speed toward the constraint [m/s]
    pub vs: Vec<f64>,
    /// Distance beyond this waypoint to the next altitude constraint [m]
    pub xtoalt: Vec<f64>,
    /// Distance before the waypoint at which to begin the turn [m]
    pub turndist: Vec<f64>,
    /// Flyby (anticipate the turn) vs flyover (overfly the point)
    pub flyby: Vec<bool>,
    /// Bearing of the leg after this waypoint [deg]
    pub next_qdr: Vec<Option<f64>>,
}

impl ActiveWaypoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Append a default record for a newly spawned aircraft.
    pub fn create(&mut self, lat: f64, lon: f64) -> usize {
        self.lat.push(lat);
        self.lon.push(lon);
        self.nextaltco.push(0.0);
        self.spd.push(None);
        self.vs.push(0.0);
        self.xtoalt.push(0.0);
        self.turndist.push(NM);
        self.flyby.push(true);
        self.next_qdr.push(None);
        self.lat.len() - 1
    }

    /// Remove a record, compacting in lockstep with the fleet arrays.
    pub fn remove(&mut self, idx: usize) {
        self.lat.remove(idx);
        self.lon.remove(idx);
        self.nextaltco.remove(idx);
        self.spd.remove(idx);
        self.vs.remove(idx);
        self.xtoalt.remove(idx);
        self.turndist.remove(idx);
        self.flyby.remove(idx);
        self.next_qdr.remove(idx);
    }

    /// Which aircraft passed their active waypoint this cycle.
    ///
    /// Flyby waypoints switch inside the turn-distance circle, flyover
    /// waypoints inside a small fixed circle. An aircraft that is already
    /// flying away from the waypoint (relative bearing beyond 90 deg)
    /// switches inside the guard circle, so it cannot end up orbiting a
    /// point it overshot.
    pub fn reached(&self, trk: &[f64], qdr: &[f64], dist: &[f64]) -> Vec<usize> {
        let mut passed = Vec::new();
        for i in 0..self.len() {
            let circle = if self.flyby[i] {
                self.turndist[i].max(FLYOVER_DIST)
            } else {
                FLYOVER_DIST
            };
            let away = normalize_180(trk[i] - qdr[i]).abs() > 90.0;
            if dist[i] < circle || (away && dist[i] < WP_GUARD_DIST) {
                passed.push(i);
            }
        }
        passed
    }

    /// Turn distance and radius [m] for a leg change from `qdr_in` to
    /// `qdr_out` at the given speed and bank angle.
    ///
    /// Radius from coordinated-turn kinematics, `tas^2 / (g tan(bank))`;
    /// the turn is begun half the heading change early. The bank tangent
    /// is floored so a zero bank request cannot blow up the radius.
    pub fn turn_geometry(tas: f64, bank: f64, qdr_in: f64, qdr_out: f64) -> (f64, f64) {
        let turnrad = tas * tas / (bank.tan().max(0.01) * GRAVITY);
        let half_turn = 0.5 * normalize_180(qdr_in - qdr_out).abs();
        let turndist = (turnrad * deg_to_rad(half_turn).tan()).abs();
        (turndist, turnrad)
    }
}
