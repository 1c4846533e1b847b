pub mod components;
pub mod config;
pub mod environment;
pub mod guidance;
pub mod navigation;
pub mod utils;

pub use components::{ActiveWaypoints, AircraftSpawn, FleetState};
pub use config::GuidanceConfig;
pub use environment::{CalmWind, UniformWind, WindModel};
pub use guidance::{
    Autopilot, CommandError, CommandResult, CommandTarget, RouteEnd, UpdateTimer,
};
pub use navigation::{NavDatabase, NextWaypoint, PositionResolver, Route, WaypointData, WaypointKind};
pub use utils::errors::GuidanceError;
