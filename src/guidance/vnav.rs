//! Vertical-profile calculator: top-of-descent / top-of-climb logic.
//!
//! Guidance principle: ignore waypoints without an altitude constraint and
//! look beyond them; climb as soon as possible after the previous
//! constraint, descend as late as the target gradient allows. The next
//! constraint can be several waypoints past the active one, which is what
//! `xtoalt` (distance from the active waypoint to the constraint) carries.

use tracing::trace;

use crate::components::{ActiveWaypoints, FleetState};
use crate::navigation::Route;
use crate::utils::constants::{FORCE_VNAV_TRIGGER, FT, NO_VNAV_TRIGGER};
use crate::utils::math::flat_earth_dist;

use super::Autopilot;

impl<R: Route> Autopilot<R> {
    /// Re-evaluate the vertical profile of aircraft `idx` against the
    /// altitude constraint `toalt` [m] lying `xtoalt` [m] beyond the
    /// active waypoint. Called on every waypoint transition and whenever
    /// VNAV is re-engaged.
    pub fn compute_vnav(
        &mut self,
        fleet: &FleetState,
        actwp: &mut ActiveWaypoints,
        idx: usize,
        toalt: Option<f64>,
        xtoalt: f64,
    ) {
        let toalt = match toalt {
            Some(alt) if fleet.swvnav[idx] => alt,
            // No constraint ahead, or VNAV off: distance to the waypoint
            // can never drop below the sentinel, so nothing triggers
            _ => {
                self.dist2vs[idx] = NO_VNAV_TRIGGER;
                return;
            }
        };

        let steepness = self.config.steepness;
        let alt = fleet.alt[idx];

        if alt > toalt + 10.0 * FT {
            // Descent: the altitude allowed at the next waypoint is bounded
            // by the gradient toward the constraint beyond it, never above
            // the current altitude
            actwp.nextaltco[idx] = alt.min(toalt + xtoalt * steepness);
            actwp.xtoalt[idx] = xtoalt;

            self.dist2vs[idx] =
                actwp.turndist[idx] + (alt - actwp.nextaltco[idx]).abs() / steepness;

            let legdist =
                flat_earth_dist(fleet.lat[idx], fleet.lon[idx], actwp.lat[idx], actwp.lon[idx]);

            if legdist < self.dist2vs[idx] {
                // Past the nominal top of descent: dial in the target now
                // and descend steeply enough to make the constraint
                self.alt[idx] = actwp.nextaltco[idx];
                let t2go = (legdist + xtoalt).max(0.1) / fleet.gs[idx].max(0.01);
                actwp.vs[idx] = (actwp.nextaltco[idx] - alt) / t2go;
            } else {
                // Nominal gradient; substitute TAS when the closure rate is
                // too low to give a meaningful descent rate
                let gs = if fleet.gs[idx] < 0.2 * fleet.tas[idx] {
                    fleet.gs[idx] + fleet.tas[idx]
                } else {
                    fleet.gs[idx]
                };
                actwp.vs[idx] = -steepness * gs;
            }
            trace!(
                "{}: T/D in {:.0} m, target {:.0} m",
                fleet.id[idx],
                self.dist2vs[idx],
                actwp.nextaltco[idx]
            );
        } else if alt < toalt - 10.0 * FT {
            // Climb: start immediately and arrive early if possible. The
            // trigger distance is forced far beyond any leg length so the
            // continuous pass always treats the climb as due.
            actwp.nextaltco[idx] = toalt;
            actwp.xtoalt[idx] = xtoalt;
            self.alt[idx] = toalt;
            self.dist2vs[idx] = FORCE_VNAV_TRIGGER;

            let legdist =
                flat_earth_dist(fleet.lat[idx], fleet.lon[idx], actwp.lat[idx], actwp.lon[idx]);
            let t2go = (legdist + xtoalt).max(0.1) / fleet.gs[idx].max(0.01);
            actwp.vs[idx] = (steepness * fleet.gs[idx]).max((toalt - alt) / t2go);
        } else {
            // Level within the 10 ft band: no vertical maneuver
            self.dist2vs[idx] = NO_VNAV_TRIGGER;
        }
    }
}
