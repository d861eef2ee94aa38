//! Integration tests for the geofence evaluator.
//!
//! These tests drive the public API the way an application would:
//! - Position fixes arriving one at a time
//! - Region lists refreshed from a backend between fixes
//! - Side effects handled by a caller-supplied handler
//!
//! Run with: `cargo test --test geofence_integration`

use spacefence::config::ConfigFile;
use spacefence::geo::{distance, Position, EARTH_RADIUS_M};
use spacefence::geofence::{
    EdgeKind, GeofenceEvaluator, GeofenceHandler, MembershipThresholds, Region, RegionPolicy,
    SharedEvaluator,
};
use spacefence::trace::Scenario;

// ============================================================================
// Helper Functions
// ============================================================================

/// Position `meters` due east of `origin` along its parallel.
fn east_of(origin: Position, meters: f64) -> Position {
    let lat_scale = origin.lat.to_radians().cos();
    Position::new(
        origin.lat,
        origin.lng + (meters / (EARTH_RADIUS_M * lat_scale)).to_degrees(),
    )
}

/// Mission District, San Francisco.
const MISSION: Position = Position::new(37.7599, -122.4148);

fn space(id: &str, name: &str, center: Position, radius: f64) -> Region {
    Region::new(id, name, center, radius)
}

/// Records visit start/end the way the app persists visit records.
#[derive(Default)]
struct VisitLog {
    open: Vec<String>,
    closed: Vec<String>,
    alerts: usize,
}

impl GeofenceHandler for VisitLog {
    fn on_enter(&mut self, region: &Region) {
        self.alerts += 1;
        self.open.push(region.id.clone());
    }

    fn on_exit(&mut self, region: &Region) {
        self.open.retain(|id| id != &region.id);
        self.closed.push(region.id.clone());
    }
}

// ============================================================================
// Integration Tests
// ============================================================================

/// The three-call walk: arrive at the ring, leave, stay away.
#[test]
fn test_end_to_end_walk() {
    let r1 = space("r1", "Corner Cafe", Position::new(0.0, 0.0), 100.0);
    let regions = vec![r1];
    let mut evaluator = GeofenceEvaluator::new(MembershipThresholds::new(300.0, 50.0));

    let at_ring = Position::new(0.0, 0.00090);
    assert!((distance(at_ring, regions[0].center) - 100.0).abs() < 1.0);
    let update = evaluator.update(at_ring, &regions);
    assert_eq!(update.entered.len(), 1);
    assert_eq!(update.entered[0].id, "r1");
    assert!(update.exited.is_empty());

    let far = Position::new(0.0, 0.01);
    let update = evaluator.update(far, &regions);
    assert!(update.entered.is_empty());
    assert_eq!(update.exited.len(), 1);
    assert_eq!(update.exited[0].name, "Corner Cafe");

    let update = evaluator.update(far, &regions);
    assert!(update.is_empty());
}

/// A user walking through two Spaces with jitter around the first ring.
#[test]
fn test_walk_with_gps_jitter_and_handler() {
    let cafe = space("cafe", "Cafe", MISSION, 100.0);
    let park = space("park", "Park", east_of(MISSION, 2000.0), 150.0);
    let regions = vec![cafe, park];

    let mut evaluator = GeofenceEvaluator::with_defaults();
    let mut visits = VisitLog::default();

    // Approaching, then jittering across the cafe's ring (90m..130m)
    for meters in [600.0, 380.0, 90.0, 130.0, 95.0, 135.0, 110.0] {
        evaluator
            .update(east_of(MISSION, meters), &regions)
            .dispatch(&mut visits);
    }
    assert_eq!(visits.open, vec!["cafe"]);
    assert_eq!(visits.alerts, 1, "jitter must not re-trigger the alert");

    // Walk to the park
    for meters in [400.0, 1000.0, 1700.0, 1950.0, 2000.0] {
        evaluator
            .update(east_of(MISSION, meters), &regions)
            .dispatch(&mut visits);
    }
    assert_eq!(visits.open, vec!["park"]);
    assert_eq!(visits.closed, vec!["cafe"]);
    assert_eq!(visits.alerts, 2);
    assert_eq!(evaluator.inside_ids(), vec!["park"]);
}

/// A Space expiring mid-visit is dropped without an exit.
#[test]
fn test_space_expiring_while_inside() {
    let popup = space("popup", "Pop-up Market", MISSION, 200.0);
    let plaza = space("plaza", "Plaza", MISSION, 300.0);
    let mut evaluator = GeofenceEvaluator::with_defaults();
    let mut visits = VisitLog::default();

    evaluator
        .update(MISSION, &[popup.clone(), plaza.clone()])
        .dispatch(&mut visits);
    assert_eq!(visits.open, vec!["popup", "plaza"]);

    let update = evaluator.update(MISSION, &[plaza.clone()]);
    assert!(update.is_empty());
    update.dispatch(&mut visits);
    assert!(visits.closed.is_empty());
    assert!(!evaluator.is_inside("popup"));
    assert!(evaluator.is_inside("plaza"));
}

/// A user parked in the band between the exit and entry rings flaps with the
/// default buffers; one parked on the exit ring does not.
#[test]
fn test_parked_user_band_behavior() {
    let regions = vec![space("hall", "Hall", MISSION, 100.0)];

    let mut evaluator = GeofenceEvaluator::with_defaults();
    let mut visits = VisitLog::default();
    let parked = east_of(MISSION, 200.0);
    for _ in 0..4 {
        evaluator.update(parked, &regions).dispatch(&mut visits);
    }
    assert_eq!(visits.alerts, 2);
    assert_eq!(visits.closed, vec!["hall", "hall"]);
    assert!(visits.open.is_empty());

    let mut evaluator = GeofenceEvaluator::with_defaults();
    let mut visits = VisitLog::default();
    let on_ring = east_of(MISSION, 149.9);
    for _ in 0..4 {
        evaluator.update(on_ring, &regions).dispatch(&mut visits);
    }
    assert_eq!(visits.alerts, 1);
    assert!(visits.closed.is_empty());
    assert_eq!(visits.open, vec!["hall"]);
}

/// Logging out and back in starts from a clean slate.
#[test]
fn test_reset_on_logout() {
    let regions = vec![space("r1", "Hall", MISSION, 100.0)];
    let mut evaluator = GeofenceEvaluator::with_defaults();

    assert_eq!(evaluator.update(MISSION, &regions).entered.len(), 1);
    assert!(evaluator.update(MISSION, &regions).is_empty());

    evaluator.reset();

    let events = evaluator.update(MISSION, &regions).events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EdgeKind::Entered);
}

/// Config buffers and the nearby pre-filter feed the evaluator.
#[test]
fn test_config_driven_pipeline() {
    let config = ConfigFile::from_ini_str(
        "[geofence]\nentry_buffer = 0\nexit_buffer = 20\n[regions]\nmax_radius = 300\nnearby_reach = 500\n",
    )
    .unwrap();
    let policy: RegionPolicy = config.region_policy();

    let requested = 1000.0;
    let radius = policy.clamp_radius(requested);
    assert_eq!(radius, 300.0);

    let all = vec![
        space("near", "Near", MISSION, radius),
        space("distant", "Distant", east_of(MISSION, 5000.0), 100.0),
    ];
    let user = east_of(MISSION, 290.0);
    let nearby = policy.nearby(user, &all);
    assert_eq!(nearby.len(), 1);

    let mut evaluator = GeofenceEvaluator::new(config.thresholds());
    assert_eq!(evaluator.update(user, &nearby).entered.len(), 1);

    // Tight entry buffer: 310m from center, radius 300, exit at 320
    let update = evaluator.update(east_of(MISSION, 310.0), &nearby);
    assert!(update.is_empty());
    let update = evaluator.update(east_of(MISSION, 330.0), &nearby);
    assert_eq!(update.exited.len(), 1);
}

/// Position fixes and region refreshes from different threads.
#[test]
fn test_shared_evaluator_across_threads() {
    let shared = SharedEvaluator::new(MembershipThresholds::default());
    let regions = vec![space("r1", "Hall", MISSION, 100.0)];

    let location_thread = {
        let shared = shared.clone();
        let regions = regions.clone();
        std::thread::spawn(move || {
            (0..50)
                .map(|_| shared.update(MISSION, &regions).entered.len())
                .sum::<usize>()
        })
    };
    let refresh_thread = {
        let shared = shared.clone();
        let regions = regions.clone();
        std::thread::spawn(move || {
            (0..50)
                .map(|_| shared.update(MISSION, &regions).entered.len())
                .sum::<usize>()
        })
    };

    let total = location_thread.join().unwrap() + refresh_thread.join().unwrap();
    assert_eq!(total, 1);
    assert!(shared.is_inside_any());
}

/// A scenario file replays identically to hand-fed updates.
#[test]
fn test_scenario_replay_matches_manual() {
    let regions = vec![space("cafe", "Cafe", MISSION, 100.0)];
    let positions: Vec<Position> = [800.0, 50.0, 120.0, 180.0, 1000.0]
        .iter()
        .map(|m| east_of(MISSION, *m))
        .collect();

    let scenario = Scenario::new(regions.clone(), positions.clone());
    let replayed = scenario.replay(&mut GeofenceEvaluator::with_defaults());

    let mut manual = GeofenceEvaluator::with_defaults();
    for (step, position) in replayed.iter().zip(&positions) {
        assert_eq!(step.update, manual.update(*position, &regions));
    }

    let transitions: Vec<(usize, EdgeKind)> = replayed
        .iter()
        .flat_map(|s| s.update.events().into_iter().map(move |e| (s.index, e.kind)))
        .collect();
    assert_eq!(
        transitions,
        vec![(1, EdgeKind::Entered), (3, EdgeKind::Exited)]
    );
}
