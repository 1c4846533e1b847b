use serde::{Deserialize, Serialize};

use crate::utils::constants::FPM;
use crate::utils::math::deg_to_rad;

/// Initial kinematic state for one aircraft entering the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftSpawn {
    pub id: String,
    /// Position [deg]
    pub lat: f64,
    pub lon: f64,
    /// Altitude [m]
    pub alt: f64,
    /// Track [deg]
    pub trk: f64,
    /// True airspeed [m/s]
    pub tas: f64,
    /// Calibrated airspeed [m/s]
    pub cas: f64,
}

/// Shared kinematic and mode state for the whole fleet, as index-aligned
/// parallel arrays. The simulation owns one of these and lends it mutably
/// to the guidance core for the duration of a single update call.
///
/// Every vector has length `len()`; rows are created and removed in
/// lockstep so an index valid for one array is valid for all of them.
#[derive(Debug, Clone, Default)]
pub struct FleetState {
    /// Callsigns
    pub id: Vec<String>,

    // Kinematics
    pub lat: Vec<f64>,  // [deg]
    pub lon: Vec<f64>,  // [deg]
    pub alt: Vec<f64>,  // [m]
    pub trk: Vec<f64>,  // [deg]
    pub tas: Vec<f64>,  // [m/s]
    pub cas: Vec<f64>,  // [m/s]
    pub gs: Vec<f64>,   // ground speed [m/s]
    pub ax: Vec<f64>,   // longitudinal acceleration [m/s^2]
    pub bank: Vec<f64>, // nominal bank angle [rad]

    // Which side of the CAS/Mach crossover altitude the aircraft is on
    pub abco: Vec<bool>,
    pub belco: Vec<bool>,

    // Pilot/ATC selected targets
    pub selalt: Vec<f64>, // [m]
    pub selvs: Vec<f64>,  // [m/s]
    pub selspd: Vec<f64>, // CAS [m/s] or Mach, per crossover side
    pub selhdg: Vec<f64>, // [deg]

    // Autopilot mode switches
    pub swlnav: Vec<bool>,
    pub swvnav: Vec<bool>,

    /// Default autopilot vertical speed when no V/S is selected [m/s]
    pub apvsdef: Vec<f64>,
}

impl FleetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Append a row seeded from the spawn state. Returns the new index.
    pub fn create(&mut self, spawn: AircraftSpawn) -> usize {
        self.lat.push(spawn.lat);
        self.lon.push(spawn.lon);
        self.alt.push(spawn.alt);
        self.trk.push(spawn.trk);
        self.tas.push(spawn.tas);
        self.cas.push(spawn.cas);
        self.gs.push(spawn.tas);
        self.ax.push(0.5);
        self.bank.push(deg_to_rad(25.0));

        self.abco.push(false);
        self.belco.push(true);

        self.selalt.push(spawn.alt);
        self.selvs.push(0.0);
        self.selspd.push(spawn.cas);
        self.selhdg.push(spawn.trk);

        self.swlnav.push(false);
        self.swvnav.push(false);

        self.apvsdef.push(1500.0 * FPM);

        self.id.push(spawn.id);
        self.id.len() - 1
    }

    /// Remove a row, compacting so indices stay contiguous `0..len-1`.
    pub fn remove(&mut self, idx: usize) {
        self.id.remove(idx);
        self.lat.remove(idx);
        self.lon.remove(idx);
        self.alt.remove(idx);
        self.trk.remove(idx);
        self.tas.remove(idx);
        self.cas.remove(idx);
        self.gs.remove(idx);
        self.ax.remove(idx);
        self.bank.remove(idx);
        self.abco.remove(idx);
        self.belco.remove(idx);
        self.selalt.remove(idx);
        self.selvs.remove(idx);
        self.selspd.remove(idx);
        self.selhdg.remove(idx);
        self.swlnav.remove(idx);
        self.swvnav.remove(idx);
        self.apvsdef.remove(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(id: &str) -> AircraftSpawn {
        AircraftSpawn {
            id: id.to_string(),
            lat: 52.0,
            lon: 4.0,
            alt: 3000.0,
            trk: 90.0,
            tas: 200.0,
            cas: 160.0,
        }
    }

    #[test]
    fn test_create_seeds_targets_from_current_state() {
        let mut fleet = FleetState::new();
        let i = fleet.create(spawn("AC1"));
        assert_eq!(i, 0);
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.selalt[0], 3000.0);
        assert_eq!(fleet.selspd[0], 160.0);
        assert_eq!(fleet.gs[0], 200.0);
        assert!(!fleet.swlnav[0] && !fleet.swvnav[0]);
    }

    #[test]
    fn test_remove_compacts_and_keeps_alignment() {
        let mut fleet = FleetState::new();
        fleet.create(spawn("AC1"));
        fleet.create(spawn("AC2"));
        fleet.create(spawn("AC3"));
        fleet.alt[2] = 9999.0;

        fleet.remove(1);

        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.id, vec!["AC1", "AC3"]);
        assert_eq!(fleet.alt[1], 9999.0);
        assert_eq!(fleet.lat.len(), fleet.swvnav.len());
        assert_eq!(fleet.apvsdef.len(), 2);
    }
}
