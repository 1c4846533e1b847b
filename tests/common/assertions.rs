use skyguide::{ActiveWaypoints, Autopilot, FleetState, Route};

/// Assert that every guidance output for every aircraft is finite
#[track_caller]
pub fn assert_outputs_finite<R: Route>(ap: &Autopilot<R>) {
    for i in 0..ap.len() {
        assert!(ap.trk[i].is_finite(), "trk[{i}] is not finite");
        assert!(ap.tas[i].is_finite(), "tas[{i}] is not finite");
        assert!(ap.alt[i].is_finite(), "alt[{i}] is not finite");
        assert!(ap.vs[i].is_finite(), "vs[{i}] is not finite");
        assert!(ap.dist2vs[i].is_finite(), "dist2vs[{i}] is not finite");
    }
}

/// Assert the three per-aircraft stores agree on the fleet size
#[track_caller]
pub fn assert_rows_aligned<R: Route>(
    fleet: &FleetState,
    actwp: &ActiveWaypoints,
    ap: &Autopilot<R>,
) {
    assert_eq!(fleet.len(), actwp.len(), "fleet/actwp row count mismatch");
    assert_eq!(fleet.len(), ap.len(), "fleet/autopilot row count mismatch");
}
