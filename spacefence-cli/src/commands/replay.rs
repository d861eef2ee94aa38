//! Replay command - run a scenario file through a geofence evaluator.

use std::path::PathBuf;

use console::style;
use spacefence::config::ConfigFile;
use spacefence::geo::Position;
use spacefence::geofence::{EdgeKind, GeofenceEvaluator, GeofenceHandler, Region};
use spacefence::trace::Scenario;

use super::common::resolve_thresholds;
use crate::error::CliError;

/// Arguments for the replay command.
pub struct ReplayArgs {
    pub scenario: PathBuf,
    pub entry_buffer: Option<f64>,
    pub exit_buffer: Option<f64>,
}

/// Run the replay command.
pub fn run(args: ReplayArgs, config: &ConfigFile) -> Result<(), CliError> {
    let thresholds = resolve_thresholds(config, args.entry_buffer, args.exit_buffer)?;
    let scenario = Scenario::load(&args.scenario).map_err(|error| CliError::Scenario {
        path: args.scenario.display().to_string(),
        error,
    })?;

    tracing::info!(
        scenario = %args.scenario.display(),
        fixes = scenario.len(),
        entry_buffer = thresholds.entry_buffer_m,
        exit_buffer = thresholds.exit_buffer_m,
        "Replaying scenario"
    );

    println!("Replaying {}", args.scenario.display());
    println!(
        "  Buffers: entry {} m, exit {} m",
        thresholds.entry_buffer_m, thresholds.exit_buffer_m
    );
    println!();

    let mut evaluator = GeofenceEvaluator::new(thresholds);
    print_replay(&scenario, &mut evaluator);
    Ok(())
}

/// Replay `scenario`, print every visit start/end, then a summary.
pub fn print_replay(scenario: &Scenario, evaluator: &mut GeofenceEvaluator) -> VisitReport {
    let mut report = VisitReport::default();

    for step in scenario.replay(evaluator) {
        report.begin_step(step.index, step.position);
        step.update.dispatch(&mut report);
    }

    for line in &report.lines {
        println!("{}", line.render());
    }
    if report.lines.is_empty() {
        println!("No transitions.");
    }

    println!();
    println!(
        "{} fixes, {} visits started, {} visits ended",
        scenario.len(),
        report.started,
        report.ended
    );
    let inside = evaluator.inside_ids();
    if inside.is_empty() {
        println!("Inside at end: (none)");
    } else {
        println!("Inside at end: {}", inside.join(", "));
    }

    report
}

/// One printed transition.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitLine {
    pub index: usize,
    pub position: Position,
    pub kind: EdgeKind,
    pub region_id: String,
    pub region_name: String,
}

impl VisitLine {
    fn render(&self) -> String {
        let label = match self.kind {
            EdgeKind::Entered => style("visit start").green().bold(),
            EdgeKind::Exited => style("visit end").yellow().bold(),
        };
        format!(
            "[{:>4}] {} {} ({}) at {}",
            self.index, label, self.region_name, self.region_id, self.position
        )
    }
}

/// Collects transitions as they are dispatched during a replay.
#[derive(Debug, Default)]
pub struct VisitReport {
    index: usize,
    position: Option<Position>,
    pub lines: Vec<VisitLine>,
    pub started: usize,
    pub ended: usize,
}

impl VisitReport {
    fn begin_step(&mut self, index: usize, position: Position) {
        self.index = index;
        self.position = Some(position);
    }

    fn record(&mut self, kind: EdgeKind, region: &Region) {
        let Some(position) = self.position else {
            return;
        };
        self.lines.push(VisitLine {
            index: self.index,
            position,
            kind,
            region_id: region.id.clone(),
            region_name: region.name.clone(),
        });
    }
}

impl GeofenceHandler for VisitReport {
    fn on_enter(&mut self, region: &Region) {
        self.started += 1;
        self.record(EdgeKind::Entered, region);
    }

    fn on_exit(&mut self, region: &Region) {
        self.ended += 1;
        self.record(EdgeKind::Exited, region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WALK: &str = r#"{
        "regions": [
            { "id": "r1", "name": "Corner Cafe", "center": { "lat": 0.0, "lng": 0.0 }, "radius": 100 }
        ],
        "positions": [
            { "lat": 0.0, "lng": 0.0009 },
            { "lat": 0.0, "lng": 0.01 },
            { "lat": 0.0, "lng": 0.01 }
        ]
    }"#;

    #[test]
    fn test_report_records_visits_per_step() {
        let scenario = Scenario::from_json_str(WALK).unwrap();
        let mut evaluator = GeofenceEvaluator::with_defaults();

        let report = print_replay(&scenario, &mut evaluator);

        assert_eq!(report.started, 1);
        assert_eq!(report.ended, 1);
        let kinds: Vec<(usize, EdgeKind)> =
            report.lines.iter().map(|l| (l.index, l.kind)).collect();
        assert_eq!(kinds, vec![(0, EdgeKind::Entered), (1, EdgeKind::Exited)]);
        assert_eq!(report.lines[0].region_name, "Corner Cafe");
    }

    #[test]
    fn test_rendered_line_mentions_region() {
        let line = VisitLine {
            index: 3,
            position: Position::new(1.0, 2.0),
            kind: EdgeKind::Entered,
            region_id: "r1".to_string(),
            region_name: "Hall".to_string(),
        };
        let text = console::strip_ansi_codes(&line.render()).into_owned();
        assert_eq!(text, "[   3] visit start Hall (r1) at (1.000000, 2.000000)");
    }

    #[test]
    fn test_run_with_missing_file() {
        let temp = TempDir::new().unwrap();
        let args = ReplayArgs {
            scenario: temp.path().join("missing.json"),
            entry_buffer: None,
            exit_buffer: None,
        };
        let err = run(args, &ConfigFile::default()).unwrap_err();
        assert!(matches!(err, CliError::Scenario { .. }));
    }

    #[test]
    fn test_run_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("walk.json");
        std::fs::write(&path, WALK).unwrap();

        let args = ReplayArgs {
            scenario: path,
            entry_buffer: Some(0.0),
            exit_buffer: Some(0.0),
        };
        assert!(run(args, &ConfigFile::default()).is_ok());
    }
}
