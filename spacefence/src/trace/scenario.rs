//! Scenario loading and replay.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Position;
use crate::geofence::{GeofenceEvaluator, GeofenceUpdate, Region, RegionError, RegionPolicy};

/// Errors loading or saving a scenario file.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Failed to read or write the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid scenario document
    #[error("Invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario has no position fixes
    #[error("Scenario contains no positions")]
    Empty,

    /// A region in the scenario is unusable
    #[error("Invalid region in scenario: {0}")]
    InvalidRegion(#[from] RegionError),
}

/// One position fix, optionally with the region list current at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<Region>>,
}

/// A recorded or generated walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Regions used by every fix without its own list.
    #[serde(default)]
    pub regions: Vec<Region>,

    /// Position fixes, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<Position>,

    /// Fixes with per-step region lists; replaces `positions` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<ScenarioStep>>,
}

/// Outcome of one replayed fix.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    /// Zero-based index of the fix.
    pub index: usize,
    /// The fix that was evaluated.
    pub position: Position,
    /// Transitions it produced.
    pub update: GeofenceUpdate,
}

impl Scenario {
    /// Build a scenario from a fixed region list and a sequence of fixes.
    pub fn new(regions: Vec<Region>, positions: Vec<Position>) -> Self {
        Self {
            regions,
            positions,
            steps: None,
        }
    }

    /// Load and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            steps = scenario.len(),
            regions = scenario.regions.len(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    /// Parse and validate a scenario from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, TraceError> {
        let scenario: Scenario = serde_json::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Write the scenario as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), TraceError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Number of fixes that will be replayed.
    pub fn len(&self) -> usize {
        match &self.steps {
            Some(steps) => steps.len(),
            None => self.positions.len(),
        }
    }

    /// Whether the scenario has no fixes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check there is something to replay and every region is usable.
    ///
    /// Radii are not capped here; oversized Spaces evaluate like any other.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.is_empty() {
            return Err(TraceError::Empty);
        }

        let policy = RegionPolicy::default();
        let step_regions = self
            .steps
            .iter()
            .flatten()
            .filter_map(|step| step.regions.as_ref())
            .flatten();

        for region in self.regions.iter().chain(step_regions) {
            policy.validate(region)?;
        }
        Ok(())
    }

    /// Feed every fix through `evaluator` in order.
    pub fn replay(&self, evaluator: &mut GeofenceEvaluator) -> Vec<ReplayStep> {
        self.fixes()
            .enumerate()
            .map(|(index, (position, regions))| ReplayStep {
                index,
                position,
                update: evaluator.update(position, regions),
            })
            .collect()
    }

    /// Each fix paired with the region list in effect for it.
    fn fixes(&self) -> Box<dyn Iterator<Item = (Position, &[Region])> + '_> {
        match &self.steps {
            Some(steps) => Box::new(steps.iter().map(move |step| {
                let regions = step.regions.as_deref().unwrap_or(self.regions.as_slice());
                (step.position, regions)
            })),
            None => Box::new(
                self.positions
                    .iter()
                    .map(move |p| (*p, self.regions.as_slice())),
            ),
        }
    }
}
