//! Config command - show the effective configuration.

use std::path::Path;

use spacefence::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Arguments for the config command.
pub struct ConfigArgs {
    /// Write a default config file if none exists.
    pub init: bool,
}

/// Run the config command.
pub fn run(args: ConfigArgs, config: &ConfigFile) -> Result<(), CliError> {
    if args.init {
        let path = ConfigFile::ensure_exists()?;
        println!("Config file ready at {}", path.display());
        println!();
    }

    let path = config_file_path();
    print!("{}", describe(config, &path));
    Ok(())
}

/// Render the settings grouped by INI section.
fn describe(config: &ConfigFile, path: &Path) -> String {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    format!(
        "Configuration: {}\n\n\
         [geofence]\n  entry_buffer = {} m\n  exit_buffer = {} m\n\n\
         [regions]\n  max_radius = {} m\n  nearby_reach = {} m\n\n\
         [logging]\n  directory = {}\n  file = {}\n",
        source,
        config.geofence.entry_buffer,
        config.geofence.exit_buffer,
        config.regions.max_radius,
        config.regions.nearby_reach,
        config.logging.directory.display(),
        config.logging.file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_describe_defaults_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");

        let text = describe(&ConfigFile::default(), &path);

        assert!(text.contains("(not found, using defaults)"));
        assert!(text.contains("entry_buffer = 300 m"));
        assert!(text.contains("exit_buffer = 50 m"));
        assert!(text.contains("max_radius = 300 m"));
        assert!(text.contains("file = spacefence.log"));
    }

    #[test]
    fn test_describe_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        let config = ConfigFile::from_ini_str("[geofence]\nentry_buffer = 120\n").unwrap();
        config.save_to(&path).unwrap();

        let text = describe(&ConfigFile::load_from(&path).unwrap(), &path);

        assert!(!text.contains("not found"));
        assert!(text.contains("entry_buffer = 120 m"));
    }
}
