pub mod guidance;

pub use guidance::GuidanceConfig;
