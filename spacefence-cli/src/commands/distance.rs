//! Distance command - great-circle distance between two points.

use spacefence::geo::{distance, is_within_radius, to_radar_position, Position};

use crate::error::CliError;

/// Arguments for the distance command.
pub struct DistanceArgs {
    pub from: Position,
    pub to: Position,
    pub radius: Option<f64>,
}

/// Run the distance command.
pub fn run(args: DistanceArgs) -> Result<(), CliError> {
    for (flag, position) in [("--from", args.from), ("--to", args.to)] {
        if !position.is_valid() {
            tracing::warn!(%position, "{} is outside the valid coordinate range", flag);
        }
    }

    let meters = distance(args.from, args.to);
    tracing::debug!(from = %args.from, to = %args.to, meters, "Computed distance");

    println!("{}", format_meters(meters));

    if let Some(radius) = args.radius {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "--radius must be a positive number of meters, got {}",
                radius
            )));
        }

        let within = is_within_radius(args.to, args.from, radius);
        let radar = to_radar_position(args.from, args.to, radius);
        println!();
        println!(
            "  Within {} m: {}",
            radius,
            if within { "yes" } else { "no" }
        );
        println!("  Radar: x={:.1}, y={:.1}", radar.x, radar.y);
    }

    Ok(())
}

/// Meters below 1 km, kilometers above, always with the raw meter value.
fn format_meters(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.1} m", meters)
    } else {
        format!("{:.3} km ({:.1} m)", meters / 1000.0, meters)
    }
}
