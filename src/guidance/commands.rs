//! Pilot/ATC mode commands. Handlers run synchronously between guidance
//! cycles and mutate targets and mode flags directly; each returns the
//! unified success-plus-optional-message shape the command dispatcher
//! expects. User-facing failures are values, never panics.

use nalgebra::Vector2;
use thiserror::Error;
use tracing::debug;

use crate::components::{ActiveWaypoints, FleetState};
use crate::environment::WindModel;
use crate::navigation::{NavDatabase, PositionResolver, Route, WaypointKind};
use crate::utils::aero::casormach;
use crate::utils::constants::{FT, NO_VNAV_TRIGGER};
use crate::utils::math::{deg_to_rad, rad_to_deg};

use super::Autopilot;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("{cmd}: Aircraft does not exist")]
    AircraftNotFound { cmd: &'static str },

    #[error("{cmd} {id}: no waypoints or destination specified")]
    NoWaypoints { cmd: &'static str, id: String },

    #[error("{id}: VNAV ON requires LNAV to be ON")]
    LnavRequired { id: String },

    #[error("{cmd}: Position {name} not found")]
    PositionNotFound { cmd: &'static str, name: String },

    #[error("{cmd}: {name} could not be added to the route")]
    WaypointRejected { cmd: &'static str, name: String },
}

/// Success carries an optional reply for the issuing console.
pub type CommandResult = Result<Option<String>, CommandError>;

/// Commands address one aircraft or the whole fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    Aircraft(usize),
    All,
}

/// Which end of the flight plan a DEST/ORIG command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEnd {
    Orig,
    Dest,
}

impl RouteEnd {
    fn cmd(self) -> &'static str {
        match self {
            RouteEnd::Orig => "ORIG",
            RouteEnd::Dest => "DEST",
        }
    }

    fn kind(self) -> WaypointKind {
        match self {
            RouteEnd::Orig => WaypointKind::Orig,
            RouteEnd::Dest => WaypointKind::Dest,
        }
    }
}

impl<R: Route> Autopilot<R> {
    fn check_idx(&self, idx: usize, cmd: &'static str) -> Result<(), CommandError> {
        if idx >= self.len() {
            Err(CommandError::AircraftNotFound { cmd })
        } else {
            Ok(())
        }
    }

    // Disabling VNAV also withdraws the vertical-maneuver trigger, so the
    // invariant "VNAV off means dist2vs is the never-trigger sentinel"
    // holds between guidance cycles too
    fn disable_vnav(&mut self, fleet: &mut FleetState, idx: usize) {
        fleet.swvnav[idx] = false;
        self.dist2vs[idx] = NO_VNAV_TRIGGER;
    }

    /// ALT acid, alt, [vspd] — select an altitude, overriding VNAV.
    pub fn sel_alt_cmd(
        &mut self,
        fleet: &mut FleetState,
        idx: usize,
        alt: f64,
        vspd: Option<f64>,
    ) -> CommandResult {
        self.check_idx(idx, "ALT")?;

        fleet.selalt[idx] = alt;
        self.disable_vnav(fleet, idx);

        match vspd {
            Some(vs) => fleet.selvs[idx] = vs,
            None => {
                // A selected V/S opposing the required altitude change
                // would fly away from the target; zero it so the default
                // rate applies
                let delalt = alt - fleet.alt[idx];
                if fleet.selvs[idx] * delalt < 0.0 && fleet.selvs[idx].abs() > 0.01 {
                    fleet.selvs[idx] = 0.0;
                }
            }
        }
        Ok(None)
    }

    /// VS acid, vspd — select a vertical speed, overriding VNAV.
    pub fn sel_vspd_cmd(&mut self, fleet: &mut FleetState, idx: usize, vspd: f64) -> CommandResult {
        self.check_idx(idx, "VS")?;
        fleet.selvs[idx] = vspd;
        self.disable_vnav(fleet, idx);
        Ok(None)
    }

    /// HDG acid, hdg — select a heading, overriding LNAV. With an active
    /// wind field and the aircraft airborne, the commanded track is the
    /// direction of the air-vector-plus-wind ground speed.
    pub fn sel_hdg_cmd(
        &mut self,
        fleet: &mut FleetState,
        wind: &dyn WindModel,
        idx: usize,
        hdg: f64,
    ) -> CommandResult {
        self.check_idx(idx, "HDG")?;

        let trk = if wind.is_active() && fleet.alt[idx] > 50.0 * FT {
            let h = deg_to_rad(hdg);
            let air = Vector2::new(fleet.tas[idx] * h.cos(), fleet.tas[idx] * h.sin());
            let gs = air + wind.sample(fleet.lat[idx], fleet.lon[idx], fleet.alt[idx]);
            rad_to_deg(gs.y.atan2(gs.x))
        } else {
            hdg
        };

        fleet.selhdg[idx] = hdg;
        self.trk[idx] = trk;
        fleet.swlnav[idx] = false;
        Ok(None)
    }

    /// SPD acid, casmach — select a speed, overriding VNAV speed guidance.
    /// Stored as Mach above the crossover altitude, CAS below it.
    pub fn sel_spd_cmd(
        &mut self,
        fleet: &mut FleetState,
        idx: usize,
        casmach: f64,
    ) -> CommandResult {
        self.check_idx(idx, "SPD")?;

        let (_, cas, mach) = casormach(casmach, fleet.alt[idx]);
        fleet.selspd[idx] = if fleet.abco[idx] { mach } else { cas };
        self.disable_vnav(fleet, idx);
        Ok(None)
    }

    /// DEST/ORIG acid [, name] — without a name, report the current value;
    /// with one, resolve it and append it to the route. A destination that
    /// becomes the active (or, with an origin present, the second)
    /// waypoint activates LNAV/VNAV direct to it. A failed resolution
    /// leaves the route untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn set_dest_orig_cmd(
        &mut self,
        fleet: &mut FleetState,
        actwp: &mut ActiveWaypoints,
        navdb: &dyn NavDatabase,
        resolver: &dyn PositionResolver,
        end: RouteEnd,
        idx: usize,
        name: Option<&str>,
    ) -> CommandResult {
        let cmd = end.cmd();
        self.check_idx(idx, cmd)?;

        let name = match name {
            Some(name) => name,
            None => {
                let current = match end {
                    RouteEnd::Dest => &self.dest[idx],
                    RouteEnd::Orig => &self.orig[idx],
                };
                return Ok(Some(format!("{} {}: {}", cmd, fleet.id[idx], current)));
            }
        };

        // Resolve before mutating anything
        let (lat, lon) = match navdb.airport_index(name) {
            Some(ap) => navdb.airport_position(ap),
            None => {
                let route = &self.routes[idx];
                let (ref_lat, ref_lon) = match end {
                    // Resolve relative to the matching end of the plan
                    RouteEnd::Dest if route.num_waypoints() > 0 => {
                        let wp = route.waypoint(route.num_waypoints() - 1);
                        wp.map(|w| (w.lat, w.lon))
                            .unwrap_or((fleet.lat[idx], fleet.lon[idx]))
                    }
                    RouteEnd::Orig if route.num_waypoints() > 0 => {
                        let wp = route.waypoint(0);
                        wp.map(|w| (w.lat, w.lon))
                            .unwrap_or((fleet.lat[idx], fleet.lon[idx]))
                    }
                    _ => (fleet.lat[idx], fleet.lon[idx]),
                };
                resolver
                    .resolve(name, ref_lat, ref_lon)
                    .ok_or_else(|| CommandError::PositionNotFound {
                        cmd,
                        name: name.to_string(),
                    })?
            }
        };

        let iwp = self.routes[idx]
            .add_waypoint(name, end.kind(), lat, lon, Some(0.0), Some(fleet.cas[idx]))
            .ok_or_else(|| CommandError::WaypointRejected {
                cmd,
                name: name.to_string(),
            })?;

        match end {
            RouteEnd::Dest => {
                self.dest[idx] = name.to_string();

                // A destination that is the only waypoint, or completes an
                // orig-dest pair, becomes the active waypoint right away
                let activate = iwp == 0
                    || (!self.orig[idx].is_empty() && self.routes[idx].num_waypoints() == 2);
                if activate {
                    if let Some(wp) = self.routes[idx].waypoint(iwp) {
                        actwp.lat[idx] = wp.lat;
                        actwp.lon[idx] = wp.lon;
                        if let Some(alt) = wp.alt {
                            actwp.nextaltco[idx] = alt;
                        }
                        actwp.spd[idx] = wp.spd;
                        fleet.swlnav[idx] = true;
                        fleet.swvnav[idx] = true;
                        self.routes[idx].direct_to(&wp.name);
                        debug!("{}: DEST {} activated", fleet.id[idx], wp.name);
                    }
                }
            }
            RouteEnd::Orig => {
                self.orig[idx] = name.to_string();
            }
        }
        Ok(None)
    }

    /// LNAV acid/all [, ON/OFF] — lateral navigation switch. Without a
    /// flag, reports the current state. Enabling requires at least one
    /// waypoint and reactivates direct-to the current waypoint.
    pub fn set_lnav_cmd(
        &mut self,
        fleet: &mut FleetState,
        target: CommandTarget,
        flag: Option<bool>,
    ) -> CommandResult {
        let idx = match target {
            CommandTarget::All => {
                let flag = flag.unwrap_or(false);
                for sw in fleet.swlnav.iter_mut() {
                    *sw = flag;
                }
                return Ok(None);
            }
            CommandTarget::Aircraft(idx) => idx,
        };
        self.check_idx(idx, "LNAV")?;

        match flag {
            None => Ok(Some(format!(
                "{}: LNAV is {}",
                fleet.id[idx],
                if fleet.swlnav[idx] { "ON" } else { "OFF" }
            ))),
            Some(true) => {
                if self.routes[idx].num_waypoints() == 0 {
                    return Err(CommandError::NoWaypoints {
                        cmd: "LNAV",
                        id: fleet.id[idx].clone(),
                    });
                }
                if !fleet.swlnav[idx] {
                    fleet.swlnav[idx] = true;
                    let route = &mut self.routes[idx];
                    if let Some(wp) = route.active_index().and_then(|i| route.waypoint(i)) {
                        route.direct_to(&wp.name);
                    }
                }
                Ok(None)
            }
            Some(false) => {
                fleet.swlnav[idx] = false;
                Ok(None)
            }
        }
    }

    /// VNAV acid/all [, ON/OFF] — vertical navigation switch. Enabling
    /// requires LNAV and at least one waypoint; the flight plan is
    /// recomputed and the vertical profile re-evaluated for the current
    /// waypoint.
    pub fn set_vnav_cmd(
        &mut self,
        fleet: &mut FleetState,
        actwp: &mut ActiveWaypoints,
        target: CommandTarget,
        flag: Option<bool>,
    ) -> CommandResult {
        let idx = match target {
            CommandTarget::All => {
                let flag = flag.unwrap_or(false);
                for i in 0..fleet.len() {
                    fleet.swvnav[i] = flag;
                    if !flag {
                        self.dist2vs[i] = NO_VNAV_TRIGGER;
                    }
                }
                return Ok(None);
            }
            CommandTarget::Aircraft(idx) => idx,
        };
        self.check_idx(idx, "VNAV")?;

        match flag {
            None => Ok(Some(format!(
                "{}: VNAV is {}",
                fleet.id[idx],
                if fleet.swvnav[idx] { "ON" } else { "OFF" }
            ))),
            Some(true) => {
                if !fleet.swlnav[idx] {
                    return Err(CommandError::LnavRequired {
                        id: fleet.id[idx].clone(),
                    });
                }
                if self.routes[idx].num_waypoints() == 0 {
                    return Err(CommandError::NoWaypoints {
                        cmd: "VNAV",
                        id: fleet.id[idx].clone(),
                    });
                }
                fleet.swvnav[idx] = true;
                self.routes[idx].recompute_plan();
                let (toalt, xtoalt) = self.routes[idx].active_constraint();
                self.compute_vnav(fleet, actwp, idx, toalt, xtoalt);
                Ok(None)
            }
            Some(false) => {
                self.disable_vnav(fleet, idx);
                Ok(None)
            }
        }
    }
}
