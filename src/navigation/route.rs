//! Route capability as seen by the guidance core.
//!
//! Flight-plan storage, construction and plan arithmetic live in the
//! simulation; the core only consumes this trait. At this boundary the
//! original wire sentinels (`-999` for "no speed", negative altitude for
//! "unspecified") are lifted into `Option` fields; implementations that
//! wrap a sentinel-based store translate at the edge.

/// Waypoint tuple returned when the route cursor advances.
#[derive(Debug, Clone, PartialEq)]
pub struct NextWaypoint {
    pub lat: f64, // [deg]
    pub lon: f64, // [deg]
    /// Altitude constraint at this waypoint [m]; `None` keeps the previous
    /// constraint
    pub alt: Option<f64>,
    /// Speed constraint [CAS m/s or Mach]; applies *from* this waypoint
    pub spd: Option<f64>,
    /// Distance beyond this waypoint to the next altitude constraint [m]
    pub xtoalt: f64,
    /// Altitude at that constraint [m]; `None` when nothing is ahead
    pub toalt: Option<f64>,
    /// False once this is the final waypoint; LNAV switches off
    pub more_waypoints: bool,
    pub flyby: bool,
    /// Bearing of the leg after this waypoint [deg]
    pub next_qdr: Option<f64>,
}

/// A stored waypoint, for lookup by index.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointData {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: Option<f64>,
    pub spd: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointKind {
    Normal,
    Orig,
    Dest,
}

/// Per-aircraft route owned exclusively by that aircraft's autopilot row.
pub trait Route {
    /// Advance the cursor and return the new active waypoint.
    fn next_waypoint(&mut self) -> NextWaypoint;

    /// Insert a waypoint; origins go to the front, destinations to the
    /// back. Returns the index of the stored waypoint, or `None` when the
    /// route rejects it.
    fn add_waypoint(
        &mut self,
        name: &str,
        kind: WaypointKind,
        lat: f64,
        lon: f64,
        alt: Option<f64>,
        spd: Option<f64>,
    ) -> Option<usize>;

    /// Make the named waypoint the active one. Returns false when the name
    /// is not on the route.
    fn direct_to(&mut self, name: &str) -> bool;

    /// Recompute derived flight-plan data (leg distances, constraint
    /// lookahead) after the route changed.
    fn recompute_plan(&mut self);

    fn active_index(&self) -> Option<usize>;

    fn num_waypoints(&self) -> usize;

    fn waypoint(&self, index: usize) -> Option<WaypointData>;

    /// Altitude constraint ahead of the active waypoint and the distance
    /// from the active waypoint to it [m].
    fn active_constraint(&self) -> (Option<f64>, f64);
}
