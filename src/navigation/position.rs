/// Free-text position resolution (navaid names, lat/lon strings), provided
/// by the simulation. The reference position disambiguates duplicates.
pub trait PositionResolver {
    fn resolve(&self, text: &str, ref_lat: f64, ref_lon: f64) -> Option<(f64, f64)>;
}
