//! SpaceFence CLI - Command-line interface
//!
//! Inspect distances, replay recorded walks, and generate demo walks through
//! the SpaceFence geofence evaluator.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spacefence::config::ConfigFile;
use spacefence::geo::Position;
use spacefence::logging::{init_logging, LoggingGuard};

use commands::config::ConfigArgs;
use commands::demo::DemoArgs;
use commands::distance::DistanceArgs;
use commands::replay::ReplayArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "spacefence")]
#[command(version, about = "Geofence evaluation for location-bounded Spaces", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the great-circle distance between two points
    Distance {
        /// First point as LAT,LNG
        #[arg(long, allow_hyphen_values = true)]
        from: Position,

        /// Second point as LAT,LNG
        #[arg(long, allow_hyphen_values = true)]
        to: Position,

        /// Also report whether --to lies within this many meters of --from
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Replay a scenario file and print visit starts and ends
    Replay {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Entry buffer in meters (default from config)
        #[arg(long)]
        entry_buffer: Option<f64>,

        /// Exit buffer in meters (default from config)
        #[arg(long)]
        exit_buffer: Option<f64>,
    },

    /// Generate a random walk around one Space and replay it
    Demo {
        /// Latitude of the Space center
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the Space center
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Space radius in meters (capped at the configured maximum)
        #[arg(long, default_value = "100")]
        radius: f64,

        /// Number of position fixes to generate
        #[arg(long, default_value = "20")]
        samples: usize,

        /// Seed for a repeatable walk
        #[arg(long)]
        seed: Option<u64>,

        /// Save the generated scenario to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration and its file path
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let _logging_guard = start_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Distance { from, to, radius } => {
            commands::distance::run(DistanceArgs { from, to, radius })
        }
        Commands::Replay {
            scenario,
            entry_buffer,
            exit_buffer,
        } => commands::replay::run(
            ReplayArgs {
                scenario,
                entry_buffer,
                exit_buffer,
            },
            &config,
        ),
        Commands::Demo {
            lat,
            lng,
            radius,
            samples,
            seed,
            output,
        } => commands::demo::run(
            DemoArgs {
                lat,
                lng,
                radius,
                samples,
                seed,
                output,
            },
            &config,
        ),
        Commands::Config { init } => commands::config::run(ConfigArgs { init }, &config),
    }
}

fn start_logging(config: &ConfigFile, verbose: bool) -> Result<LoggingGuard, CliError> {
    let level = if verbose { "debug" } else { "info" };
    let guard = init_logging(&config.logging.directory, &config.logging.file, level)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %config.logging.directory.join(&config.logging.file).display(),
        "SpaceFence starting"
    );
    Ok(guard)
}
