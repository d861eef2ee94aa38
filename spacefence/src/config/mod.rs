//! Configuration for SpaceFence.
//!
//! Settings live in an INI file at `~/.spacefence/config.ini`:
//!
//! ```ini
//! [geofence]
//! entry_buffer = 300
//! exit_buffer = 50
//!
//! [regions]
//! max_radius = 300
//! nearby_reach = 500
//!
//! [logging]
//! directory = logs
//! file = spacefence.log
//! ```
//!
//! Settings structs live in `settings`, parsing in `parser`, and
//! serialization in `writer`.

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, GeofenceSettings, LoggingSettings, RegionSettings};
