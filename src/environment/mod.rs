pub mod wind;

pub use wind::{CalmWind, UniformWind, WindModel};
