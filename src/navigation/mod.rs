pub mod navdb;
pub mod position;
pub mod route;

pub use navdb::NavDatabase;
pub use position::PositionResolver;
pub use route::{NextWaypoint, Route, WaypointData, WaypointKind};
