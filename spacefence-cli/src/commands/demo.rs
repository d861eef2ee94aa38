//! Demo command - generate a random walk around one Space and replay it.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spacefence::config::ConfigFile;
use spacefence::geo::{random_position_within, Position};
use spacefence::geofence::{GeofenceEvaluator, MembershipThresholds, Region};
use spacefence::trace::Scenario;

use super::common::resolve_thresholds;
use super::replay::print_replay;
use crate::error::CliError;

/// Arguments for the demo command.
pub struct DemoArgs {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub samples: usize,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

/// Run the demo command.
pub fn run(args: DemoArgs, config: &ConfigFile) -> Result<(), CliError> {
    if args.samples == 0 {
        return Err(CliError::InvalidArgument(
            "--samples must be at least 1".to_string(),
        ));
    }

    let center = Position::new(args.lat, args.lng);
    if !center.is_valid() {
        return Err(CliError::InvalidArgument(format!(
            "center {} is outside the valid coordinate range",
            center
        )));
    }

    let policy = config.region_policy();
    let radius = policy.clamp_radius(args.radius);
    if radius < args.radius {
        println!(
            "Radius {} m exceeds the {} m maximum; using {} m",
            args.radius, policy.max_radius_m, radius
        );
    }

    let region = Region::new("demo", "Demo Space", center, radius);
    policy
        .validate(&region)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let thresholds = resolve_thresholds(config, None, None)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let spread = walk_spread(&region, &thresholds);
    let positions = generate_walk(center, spread, args.samples, &mut rng);
    tracing::info!(
        %center,
        radius,
        spread,
        samples = args.samples,
        seed = ?args.seed,
        "Generated demo walk"
    );

    let scenario = Scenario::new(vec![region], positions);

    if let Some(path) = &args.output {
        scenario.save(path).map_err(|error| CliError::Scenario {
            path: path.display().to_string(),
            error,
        })?;
        println!("Saved scenario to {}", path.display());
    }

    println!(
        "Demo Space at {} with radius {} m, {} fixes within {:.0} m",
        center, radius, args.samples, spread
    );
    println!();

    let mut evaluator = GeofenceEvaluator::new(thresholds);
    print_replay(&scenario, &mut evaluator);
    Ok(())
}

/// Sampling radius that covers the region and both sides of its entry ring.
fn walk_spread(region: &Region, thresholds: &MembershipThresholds) -> f64 {
    region.radius + 2.0 * thresholds.entry_buffer_m.max(thresholds.exit_buffer_m)
}

/// Independent uniform fixes within `spread` meters of `center`.
fn generate_walk<R: Rng>(
    center: Position,
    spread: f64,
    samples: usize,
    rng: &mut R,
) -> Vec<Position> {
    (0..samples)
        .map(|_| random_position_within(center, spread, rng))
        .collect()
}
