//! The guidance computer: per-aircraft waypoint transitions, vertical
//! profile management and the fleet-wide continuous guidance pass, driven
//! at a fixed cadence from the simulation loop.

pub mod commands;
pub mod scheduler;
mod vnav;

pub use commands::{CommandError, CommandResult, CommandTarget, RouteEnd};
pub use scheduler::UpdateTimer;

use tracing::debug;

use crate::components::{ActiveWaypoints, FleetState};
use crate::config::GuidanceConfig;
use crate::navigation::Route;
use crate::utils::aero::{cas2mach, casormach2tas, mach2cas};
use crate::utils::constants::{NO_VNAV_TRIGGER, WP_GUARD_DIST};
use crate::utils::math::{flat_earth_dist, qdr_dist};

/// Guidance outputs and route ownership for the whole fleet, index-aligned
/// with [`FleetState`]. The simulation integrates aircraft kinematics
/// toward these commands.
pub struct Autopilot<R: Route> {
    timer: UpdateTimer,
    config: GuidanceConfig,

    // Commanded targets
    pub trk: Vec<f64>, // [deg]
    pub spd: Vec<f64>, // selected CAS [m/s] or Mach
    pub tas: Vec<f64>, // [m/s]
    pub alt: Vec<f64>, // [m]
    pub vs: Vec<f64>,  // [m/s]

    /// Distance to the active waypoint at which the vertical maneuver
    /// starts [m]; `NO_VNAV_TRIGGER` means never
    pub dist2vs: Vec<f64>,
    /// Whether VNAV vertical guidance is active this cycle
    pub swvnavvs: Vec<bool>,
    /// Last vertical speed computed by VNAV [m/s]
    pub vnavvs: Vec<f64>,

    pub orig: Vec<String>,
    pub dest: Vec<String>,

    /// Each aircraft's route, owned exclusively by its row
    pub routes: Vec<R>,
}

impl<R: Route> Autopilot<R> {
    pub fn new(config: GuidanceConfig) -> Self {
        Self {
            timer: UpdateTimer::new(config.update_interval),
            config,
            trk: Vec::new(),
            spd: Vec::new(),
            tas: Vec::new(),
            alt: Vec::new(),
            vs: Vec::new(),
            dist2vs: Vec::new(),
            swvnavvs: Vec::new(),
            vnavvs: Vec::new(),
            orig: Vec::new(),
            dest: Vec::new(),
            routes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    /// Append a guidance row for the most recently created fleet row,
    /// seeded from its current state, taking ownership of its route.
    pub fn create(&mut self, fleet: &FleetState, route: R) -> usize {
        let idx = self.routes.len();
        debug_assert!(idx < fleet.len(), "fleet row must be created first");

        self.trk.push(fleet.trk[idx]);
        self.spd.push(fleet.selspd[idx]);
        self.tas.push(fleet.tas[idx]);
        self.alt.push(fleet.alt[idx]);
        self.vs.push(0.0);
        self.dist2vs.push(NO_VNAV_TRIGGER);
        self.swvnavvs.push(false);
        self.vnavvs.push(0.0);
        self.orig.push(String::new());
        self.dest.push(String::new());
        self.routes.push(route);
        idx
    }

    /// Remove a guidance row, compacting in lockstep with the fleet.
    pub fn remove(&mut self, idx: usize) {
        self.trk.remove(idx);
        self.spd.remove(idx);
        self.tas.remove(idx);
        self.alt.remove(idx);
        self.vs.remove(idx);
        self.dist2vs.remove(idx);
        self.swvnavvs.remove(idx);
        self.vnavvs.remove(idx);
        self.orig.remove(idx);
        self.dest.remove(idx);
        self.routes.remove(idx);
    }

    /// One simulation update at simulated time `simt` [s].
    ///
    /// The heavy phase (waypoint transitions, then the fleet-wide guidance
    /// pass) runs only when the cadence gate opens. Airspeed resolution
    /// from the selected speed runs on every call regardless, so the TAS
    /// command tracks altitude at the caller's full tick rate.
    pub fn update(&mut self, simt: f64, fleet: &mut FleetState, actwp: &mut ActiveWaypoints) {
        debug_assert_eq!(fleet.len(), self.len());
        debug_assert_eq!(fleet.len(), actwp.len());

        if self.timer.due(simt) {
            let n = fleet.len();

            // Bearing and distance to the active waypoint, whole fleet
            let mut qdr = vec![0.0; n];
            let mut dist = vec![0.0; n];
            for i in 0..n {
                let (q, d) = qdr_dist(fleet.lat[i], fleet.lon[i], actwp.lat[i], actwp.lon[i]);
                qdr[i] = q;
                dist[i] = d;
            }

            // Scalar phase: advance the route cursor of every aircraft
            // that passed its waypoint this cycle
            for i in actwp.reached(&fleet.trk, &qdr, &dist) {
                self.waypoint_transition(i, fleet, actwp, &mut qdr);
            }

            // Batch phase: continuous guidance over the whole fleet
            self.continuous_guidance(fleet, actwp, &qdr);
        }

        self.resolve_airspeed(fleet);
    }

    /// Sequential per-aircraft state update when waypoint `i`'s aircraft
    /// passes its active waypoint.
    fn waypoint_transition(
        &mut self,
        i: usize,
        fleet: &mut FleetState,
        actwp: &mut ActiveWaypoints,
        qdr: &mut [f64],
    ) {
        // VNAV speed constraints apply *from* the waypoint where they are
        // given, so hold on to the constraint of the waypoint being passed
        // before the cursor moves on
        let from_spd = actwp.spd[i];

        let wp = self.routes[i].next_waypoint();

        // End of route switches LNAV off; VNAV never runs without LNAV
        if fleet.swlnav[i] && !wp.more_waypoints {
            debug!("{}: end of route, LNAV off", fleet.id[i]);
        }
        fleet.swlnav[i] = fleet.swlnav[i] && wp.more_waypoints;
        fleet.swvnav[i] = fleet.swvnav[i] && fleet.swlnav[i];

        actwp.lat[i] = wp.lat;
        actwp.lon[i] = wp.lon;
        actwp.flyby[i] = wp.flyby;
        actwp.next_qdr[i] = wp.next_qdr;
        actwp.xtoalt[i] = wp.xtoalt;

        // An unspecified altitude keeps the previous constraint
        if let Some(alt) = wp.alt {
            actwp.nextaltco[i] = alt;
        }

        // A speed constraint is held as Mach above the crossover altitude
        // and as CAS below it, whichever will stay constant while the
        // altitude changes
        actwp.spd[i] = match wp.spd {
            Some(spd) if fleet.swlnav[i] && fleet.swvnav[i] => {
                if fleet.abco[i] && spd > 1.0 {
                    Some(cas2mach(spd, fleet.alt[i]))
                } else if fleet.belco[i] && spd > 0.0 && spd <= 1.0 {
                    Some(mach2cas(spd, fleet.alt[i]))
                } else {
                    Some(spd)
                }
            }
            _ => None,
        };

        // The speed given at the waypoint just passed becomes the
        // commanded speed now
        if fleet.swvnav[i] {
            if let Some(spd) = from_spd {
                if spd > 0.0 {
                    fleet.selspd[i] = spd;
                }
            }
        }

        // Fresh bearing to the new active waypoint, then its turn
        // distance; without a known next-leg bearing the current bearing
        // stands in so the geometry stays defined
        let (q, _) = qdr_dist(fleet.lat[i], fleet.lon[i], actwp.lat[i], actwp.lon[i]);
        qdr[i] = q;
        let out_qdr = wp.next_qdr.unwrap_or(q);
        let (turndist, _) =
            ActiveWaypoints::turn_geometry(fleet.tas[i], fleet.bank[i], q, out_qdr);
        actwp.turndist[i] = turndist;

        self.compute_vnav(fleet, actwp, i, wp.toalt, wp.xtoalt);
    }

    /// Fleet-wide guidance arithmetic, evaluated per heavy cycle.
    fn continuous_guidance(
        &mut self,
        fleet: &mut FleetState,
        actwp: &mut ActiveWaypoints,
        qdr: &[f64],
    ) {
        let steepness = self.config.steepness;

        for i in 0..fleet.len() {
            let dist2wp =
                flat_earth_dist(fleet.lat[i], fleet.lon[i], actwp.lat[i], actwp.lon[i]);

            // Descend as late as possible, climb as soon as possible
            let startdescent =
                dist2wp < self.dist2vs[i] || actwp.nextaltco[i] > fleet.alt[i];

            // Past the last waypoint LNAV is off and the turn distance may
            // be zero; the guard circle keeps a descent to the final
            // waypoint running
            self.swvnavvs[i] = fleet.swvnav[i]
                && if fleet.swlnav[i] {
                    startdescent
                } else {
                    dist2wp <= WP_GUARD_DIST.max(actwp.turndist[i])
                };

            // Re-tighten the required rate as the geometry changes
            let t2go2alt = (dist2wp + actwp.xtoalt[i] - actwp.turndist[i]).max(0.0)
                / fleet.gs[i].max(0.5);
            actwp.vs[i] = (steepness * fleet.gs[i])
                .max((actwp.nextaltco[i] - fleet.alt[i]).abs() / t2go2alt.max(1.0));

            if self.swvnavvs[i] {
                self.vnavvs[i] = actwp.vs[i];
            }

            let selvs = if fleet.selvs[i].abs() > 0.1 {
                fleet.selvs[i]
            } else {
                fleet.apvsdef[i]
            };
            self.vs[i] = if self.swvnavvs[i] { self.vnavvs[i] } else { selvs };
            self.alt[i] = if self.swvnavvs[i] {
                actwp.nextaltco[i]
            } else {
                fleet.selalt[i]
            };

            // Keep the hold-mode altitude display consistent after
            // auto-leveling
            if self.swvnavvs[i] {
                fleet.selalt[i] = actwp.nextaltco[i];
            }

            // LNAV commanded track; holds the last command otherwise
            if fleet.swlnav[i] {
                self.trk[i] = qdr[i];
            }

            // Anticipate the distance needed to reach the waypoint speed
            // constraint and command it once inside that distance
            if fleet.swvnav[i] {
                if let Some(wpspd) = actwp.spd[i] {
                    let nexttas = casormach2tas(wpspd, fleet.alt[i]);
                    let tasdiff = nexttas - fleet.tas[i];
                    let ax = fleet.ax[i].abs().max(0.01);
                    let dtspdchg = tasdiff.abs() / ax;
                    let dxspdchg = 0.5 * tasdiff.signum() * ax * dtspdchg * dtspdchg
                        + fleet.tas[i] * dtspdchg;
                    if dist2wp < dxspdchg {
                        fleet.selspd[i] = wpspd;
                    }
                }
            }
        }
    }

    /// Below the crossover altitude the selected speed is a constant CAS,
    /// above it a constant Mach; either way the TAS command follows the
    /// current altitude. Runs at full call rate, outside the cadence gate.
    fn resolve_airspeed(&mut self, fleet: &FleetState) {
        for i in 0..fleet.len() {
            self.spd[i] = fleet.selspd[i];
            self.tas[i] = casormach2tas(fleet.selspd[i], fleet.alt[i]);
        }
    }
}
