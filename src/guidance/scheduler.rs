/// Fixed-cadence gate for the heavy guidance phase.
///
/// The caller may tick at any rate; the heavy phase (waypoint transitions
/// plus the fleet-wide guidance pass) runs only when the interval has
/// elapsed. A simulated clock that jumped backward, or a time near the
/// start of the run, counts as due so a scenario reset recovers cleanly.
#[derive(Debug, Clone)]
pub struct UpdateTimer {
    t0: f64,
    dt: f64,
}

impl UpdateTimer {
    pub fn new(dt: f64) -> Self {
        Self { t0: -999.0, dt }
    }

    /// True when the heavy phase is due at simulated time `simt`; marks
    /// the phase as run at that time.
    pub fn due(&mut self, simt: f64) -> bool {
        if self.t0 + self.dt < simt || simt < self.t0 || simt < self.dt {
            self.t0 = simt;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> f64 {
        self.dt
    }
}
