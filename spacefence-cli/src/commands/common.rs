//! Helpers shared by the evaluation commands.

use spacefence::config::ConfigFile;
use spacefence::geofence::MembershipThresholds;

use crate::error::CliError;

/// Resolve membership buffers: command-line values win over the config file.
pub fn resolve_thresholds(
    config: &ConfigFile,
    entry_buffer: Option<f64>,
    exit_buffer: Option<f64>,
) -> Result<MembershipThresholds, CliError> {
    let defaults = config.thresholds();
    let entry = check_buffer("--entry-buffer", entry_buffer)?.unwrap_or(defaults.entry_buffer_m);
    let exit = check_buffer("--exit-buffer", exit_buffer)?.unwrap_or(defaults.exit_buffer_m);

    let thresholds = MembershipThresholds::new(entry, exit);
    if !thresholds.is_ordered() {
        tracing::warn!(
            entry_buffer = entry,
            exit_buffer = exit,
            "Buffers should satisfy entry > exit > 0; arrivals and departures may flap"
        );
    }

    Ok(thresholds)
}

fn check_buffer(flag: &str, value: Option<f64>) -> Result<Option<f64>, CliError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CliError::InvalidArgument(format!(
            "{} must be a non-negative number of meters, got {}",
            flag, v
        ))),
        other => Ok(other),
    }
}
