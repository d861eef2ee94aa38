//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [geofence] section
    if let Some(section) = ini.section(Some("geofence")) {
        if let Some(v) = section.get("entry_buffer") {
            config.geofence.entry_buffer = parse_meters("geofence", "entry_buffer", v, true)?;
        }
        if let Some(v) = section.get("exit_buffer") {
            config.geofence.exit_buffer = parse_meters("geofence", "exit_buffer", v, true)?;
        }
        if !config.thresholds().is_ordered() {
            tracing::warn!(
                entry_buffer = config.geofence.entry_buffer,
                exit_buffer = config.geofence.exit_buffer,
                "geofence buffers should satisfy entry_buffer > exit_buffer > 0"
            );
        }
    }

    // [regions] section
    if let Some(section) = ini.section(Some("regions")) {
        if let Some(v) = section.get("max_radius") {
            config.regions.max_radius = parse_meters("regions", "max_radius", v, false)?;
        }
        if let Some(v) = section.get("nearby_reach") {
            config.regions.nearby_reach = parse_meters("regions", "nearby_reach", v, true)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains('/') || v.contains('\\') {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "file".to_string(),
                    value: v.to_string(),
                    reason: "must be a plain file name".to_string(),
                });
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

/// Parse a distance in meters.
///
/// Zero is accepted only when `allow_zero` is set; negative and non-finite
/// values never are.
fn parse_meters(
    section: &str,
    key: &str,
    value: &str,
    allow_zero: bool,
) -> Result<f64, ConfigFileError> {
    let invalid = |reason: &str| ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let meters: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("must be a number of meters"))?;

    if !meters.is_finite() {
        return Err(invalid("must be a finite number of meters"));
    }
    if meters < 0.0 || (!allow_zero && meters == 0.0) {
        return Err(invalid(if allow_zero {
            "must not be negative"
        } else {
            "must be greater than zero"
        }));
    }

    Ok(meters)
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
