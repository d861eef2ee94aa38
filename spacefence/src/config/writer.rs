//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[geofence]
; Extra distance beyond a Space's radius at which the user counts as arrived (meters).
; Generous so an approaching user is picked up early.
entry_buffer = {}
; Extra distance beyond a Space's radius before an arrived user counts as gone (meters).
; Keeps a user who steps just outside the ring from dropping out.
exit_buffer = {}

[regions]
; Largest radius a Space may be created with (meters)
max_radius = {}
; How far beyond its radius a Space is still listed as nearby (meters)
nearby_reach = {}

[logging]
; Directory for log files (~ expands to your home directory)
directory = {}
; Log file name, cleared at the start of each session
file = {}
"#,
        config.geofence.entry_buffer,
        config.geofence.exit_buffer,
        config.regions.max_radius,
        config.regions.nearby_reach,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("entry_buffer = 300\n"));
        assert!(content.contains("exit_buffer = 50\n"));
        assert!(content.contains("max_radius = 300\n"));
        assert!(content.contains("nearby_reach = 500\n"));
        assert!(content.contains("file = spacefence.log\n"));
    }

    #[test]
    fn test_fractional_values_keep_precision() {
        let mut config = ConfigFile::default();
        config.geofence.exit_buffer = 12.75;
        let content = to_config_string(&config);
        assert!(content.contains("exit_buffer = 12.75\n"));
    }
}
