use nalgebra::Vector2;

/// Wind field sampled by the guidance core when converting a selected
/// heading into a ground track.
pub trait WindModel {
    /// False when no wind field is defined; heading equals track then.
    fn is_active(&self) -> bool;

    /// Wind vector (north, east) [m/s] at the given position and altitude.
    fn sample(&self, lat: f64, lon: f64, alt: f64) -> Vector2<f64>;
}

/// No wind.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalmWind;

impl WindModel for CalmWind {
    fn is_active(&self) -> bool {
        false
    }

    fn sample(&self, _lat: f64, _lon: f64, _alt: f64) -> Vector2<f64> {
        Vector2::zeros()
    }
}

/// Uniform wind, the same vector everywhere.
#[derive(Debug, Clone, Copy)]
pub struct UniformWind {
    pub north: f64,
    pub east: f64,
}

impl UniformWind {
    pub fn new(north: f64, east: f64) -> Self {
        Self { north, east }
    }
}

impl WindModel for UniformWind {
    fn is_active(&self) -> bool {
        true
    }

    fn sample(&self, _lat: f64, _lon: f64, _alt: f64) -> Vector2<f64> {
        Vector2::new(self.north, self.east)
    }
}
