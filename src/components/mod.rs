pub mod fleet;
pub mod waypoint;

pub use fleet::{AircraftSpawn, FleetState};
pub use waypoint::ActiveWaypoints;
