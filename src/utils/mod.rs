pub mod aero;
pub mod constants;
pub mod errors;
pub mod math;

pub use aero::*;
pub use constants::*;
pub use errors::*;
pub use math::*;
