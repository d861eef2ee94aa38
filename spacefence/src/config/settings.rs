//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

use crate::geofence::{
    MembershipThresholds, RegionPolicy, DEFAULT_ENTRY_BUFFER_M, DEFAULT_EXIT_BUFFER_M,
    DEFAULT_MAX_RADIUS_M, DEFAULT_NEARBY_REACH_M,
};
use crate::logging::{default_log_dir, default_log_file};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Geofence hysteresis buffers
    pub geofence: GeofenceSettings,
    /// Caller-side region rules
    pub regions: RegionSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[geofence]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceSettings {
    /// Entry buffer beyond a region's radius (meters)
    pub entry_buffer: f64,
    /// Exit buffer beyond a region's radius (meters)
    pub exit_buffer: f64,
}

/// `[regions]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSettings {
    /// Largest radius a Space may be created with (meters)
    pub max_radius: f64,
    /// Reach beyond a Space's radius for it to count as nearby (meters)
    pub nearby_reach: f64,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory log files are written to
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            geofence: GeofenceSettings {
                entry_buffer: DEFAULT_ENTRY_BUFFER_M,
                exit_buffer: DEFAULT_EXIT_BUFFER_M,
            },
            regions: RegionSettings {
                max_radius: DEFAULT_MAX_RADIUS_M,
                nearby_reach: DEFAULT_NEARBY_REACH_M,
            },
            logging: LoggingSettings {
                directory: PathBuf::from(default_log_dir()),
                file: default_log_file().to_string(),
            },
        }
    }
}

impl ConfigFile {
    /// Hysteresis thresholds for a geofence evaluator.
    pub fn thresholds(&self) -> MembershipThresholds {
        MembershipThresholds::new(self.geofence.entry_buffer, self.geofence.exit_buffer)
    }

    /// Region rules for the caller side.
    pub fn region_policy(&self) -> RegionPolicy {
        RegionPolicy {
            max_radius_m: self.regions.max_radius,
            nearby_reach_m: self.regions.nearby_reach,
        }
    }
}
