use skyguide::utils::math::qdr_dist;
use skyguide::{
    ActiveWaypoints, AircraftSpawn, Autopilot, FleetState, GuidanceConfig, NavDatabase,
    NextWaypoint, PositionResolver, Route, WaypointData, WaypointKind,
};

/// One waypoint of a scripted test route
#[derive(Debug, Clone)]
pub struct TestWaypoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: Option<f64>,
    pub spd: Option<f64>,
    pub flyby: bool,
}

impl TestWaypoint {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
            alt: None,
            spd: None,
            flyby: true,
        }
    }

    pub fn with_alt(mut self, alt: f64) -> Self {
        self.alt = Some(alt);
        self
    }

    pub fn with_spd(mut self, spd: f64) -> Self {
        self.spd = Some(spd);
        self
    }
}

/// In-memory route double with the lookahead semantics the core expects:
/// altitude constraints may sit several waypoints past the active one, and
/// `xtoalt` accumulates the leg distances to them.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoute {
    pub waypoints: Vec<TestWaypoint>,
    pub active: usize,
    /// Names passed to `direct_to`, for assertions
    pub directed: Vec<String>,
    pub recomputes: usize,
}

impl ScriptedRoute {
    pub fn new(waypoints: Vec<TestWaypoint>) -> Self {
        Self {
            waypoints,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn constraint_from(&self, start: usize) -> (Option<f64>, f64) {
        let mut xtoalt = 0.0;
        for j in start..self.waypoints.len() {
            if j > start {
                let a = &self.waypoints[j - 1];
                let b = &self.waypoints[j];
                xtoalt += qdr_dist(a.lat, a.lon, b.lat, b.lon).1;
            }
            if let Some(alt) = self.waypoints[j].alt {
                return (Some(alt), xtoalt);
            }
        }
        (None, 0.0)
    }
}

impl Route for ScriptedRoute {
    fn next_waypoint(&mut self) -> NextWaypoint {
        if self.waypoints.is_empty() {
            return NextWaypoint {
                lat: 0.0,
                lon: 0.0,
                alt: None,
                spd: None,
                xtoalt: 0.0,
                toalt: None,
                more_waypoints: false,
                flyby: true,
                next_qdr: None,
            };
        }

        let more = self.active + 1 < self.waypoints.len();
        if more {
            self.active += 1;
        }
        let idx = self.active;
        let wp = self.waypoints[idx].clone();
        let (toalt, xtoalt) = self.constraint_from(idx);
        let next_qdr = self
            .waypoints
            .get(idx + 1)
            .map(|next| qdr_dist(wp.lat, wp.lon, next.lat, next.lon).0);

        NextWaypoint {
            lat: wp.lat,
            lon: wp.lon,
            alt: wp.alt,
            spd: wp.spd,
            xtoalt,
            toalt,
            more_waypoints: more,
            flyby: wp.flyby,
            next_qdr,
        }
    }

    fn add_waypoint(
        &mut self,
        name: &str,
        kind: WaypointKind,
        lat: f64,
        lon: f64,
        alt: Option<f64>,
        spd: Option<f64>,
    ) -> Option<usize> {
        let wp = TestWaypoint {
            name: name.to_string(),
            lat,
            lon,
            alt,
            spd,
            flyby: true,
        };
        match kind {
            WaypointKind::Orig => {
                self.waypoints.insert(0, wp);
                Some(0)
            }
            WaypointKind::Dest | WaypointKind::Normal => {
                self.waypoints.push(wp);
                Some(self.waypoints.len() - 1)
            }
        }
    }

    fn direct_to(&mut self, name: &str) -> bool {
        self.directed.push(name.to_string());
        match self.waypoints.iter().position(|wp| wp.name == name) {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }

    fn recompute_plan(&mut self) {
        self.recomputes += 1;
    }

    fn active_index(&self) -> Option<usize> {
        if self.waypoints.is_empty() {
            None
        } else {
            Some(self.active)
        }
    }

    fn num_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    fn waypoint(&self, index: usize) -> Option<WaypointData> {
        self.waypoints.get(index).map(|wp| WaypointData {
            name: wp.name.clone(),
            lat: wp.lat,
            lon: wp.lon,
            alt: wp.alt,
            spd: wp.spd,
        })
    }

    fn active_constraint(&self) -> (Option<f64>, f64) {
        self.constraint_from(self.active)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubNavDb {
    airports: Vec<(String, f64, f64)>,
}

impl StubNavDb {
    pub fn with_airport(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.airports.push((name.to_string(), lat, lon));
        self
    }
}

impl NavDatabase for StubNavDb {
    fn airport_index(&self, name: &str) -> Option<usize> {
        self.airports.iter().position(|a| a.0 == name)
    }

    fn airport_position(&self, index: usize) -> (f64, f64) {
        (self.airports[index].1, self.airports[index].2)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubResolver {
    positions: Vec<(String, f64, f64)>,
}

impl StubResolver {
    pub fn with_position(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.positions.push((name.to_string(), lat, lon));
        self
    }
}

impl PositionResolver for StubResolver {
    fn resolve(&self, text: &str, _ref_lat: f64, _ref_lon: f64) -> Option<(f64, f64)> {
        self.positions
            .iter()
            .find(|p| p.0 == text)
            .map(|p| (p.1, p.2))
    }
}

/// Fleet, active-waypoint records and autopilot wired together the way the
/// simulation would own them.
pub struct TestGuidance {
    pub fleet: FleetState,
    pub actwp: ActiveWaypoints,
    pub ap: Autopilot<ScriptedRoute>,
}

impl TestGuidance {
    pub fn new() -> Self {
        Self {
            fleet: FleetState::new(),
            actwp: ActiveWaypoints::new(),
            ap: Autopilot::new(GuidanceConfig::default()),
        }
    }

    /// Spawn an aircraft; its active waypoint starts on the route's first
    /// waypoint when one exists.
    pub fn spawn(&mut self, spawn: AircraftSpawn, route: ScriptedRoute) -> usize {
        let idx = self.fleet.create(spawn);
        self.actwp.create(self.fleet.lat[idx], self.fleet.lon[idx]);
        self.ap.create(&self.fleet, route);

        if let Some(wp) = self.ap.routes[idx].waypoint(0) {
            self.actwp.lat[idx] = wp.lat;
            self.actwp.lon[idx] = wp.lon;
            if let Some(alt) = wp.alt {
                self.actwp.nextaltco[idx] = alt;
            }
            self.actwp.spd[idx] = wp.spd;
        }
        idx
    }

    pub fn remove(&mut self, idx: usize) {
        self.fleet.remove(idx);
        self.actwp.remove(idx);
        self.ap.remove(idx);
    }

    pub fn update(&mut self, simt: f64) {
        self.ap.update(simt, &mut self.fleet, &mut self.actwp);
    }

    pub fn enable_nav(&mut self, idx: usize) {
        self.fleet.swlnav[idx] = true;
        self.fleet.swvnav[idx] = true;
    }
}

impl Default for TestGuidance {
    fn default() -> Self {
        Self::new()
    }
}

/// Aircraft in cruise at 3000 m over the Dutch coast, flying east
pub fn cruise_spawn(id: &str) -> AircraftSpawn {
    AircraftSpawn {
        id: id.to_string(),
        lat: 52.0,
        lon: 4.0,
        alt: 3000.0,
        trk: 90.0,
        tas: 200.0,
        cas: 180.0,
    }
}

pub fn steepness() -> f64 {
    GuidanceConfig::default().steepness
}
