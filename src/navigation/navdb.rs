/// Navigation-database lookup, provided by the simulation.
pub trait NavDatabase {
    /// Index of a known airport by name, e.g. an ICAO code.
    fn airport_index(&self, name: &str) -> Option<usize>;

    /// (lat, lon) [deg] of the airport at `index`. Only called with
    /// indices returned by `airport_index`.
    fn airport_position(&self, index: usize) -> (f64, f64);
}
