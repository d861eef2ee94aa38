//! Regions of interest and the application's policy around them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::{distance, Position};

/// Default maximum radius a Space may be created with (meters).
pub const DEFAULT_MAX_RADIUS_M: f64 = 300.0;

/// Default reach beyond a Space's radius for it to count as "nearby" (meters).
pub const DEFAULT_NEARBY_REACH_M: f64 = 500.0;

/// A named circular area of interest.
///
/// Regions are supplied anew on every evaluation cycle. Identity across
/// cycles is the `id` string and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Center of the circle
    pub center: Position,
    /// Radius in meters
    pub radius: f64,
}

impl Region {
    /// Create a new region.
    pub fn new(id: impl Into<String>, name: impl Into<String>, center: Position, radius: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            center,
            radius,
        }
    }

    /// Distance from `position` to this region's center in meters.
    pub fn distance_from(&self, position: Position) -> f64 {
        distance(position, self.center)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] r={:.0}m @ {}", self.name, self.id, self.radius, self.center)
    }
}

/// Reasons a region is rejected by [`RegionPolicy::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum RegionError {
    /// Identifier is empty
    #[error("Region identifier must not be empty")]
    EmptyId,

    /// Radius is zero, negative, or not finite
    #[error("Invalid radius for region '{id}': {radius} (must be a positive number of meters)")]
    InvalidRadius { id: String, radius: f64 },
}

/// Caller-side rules for Spaces.
///
/// The evaluator itself never caps or filters regions. These rules belong to
/// the code that creates Spaces and that decides which ones to feed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionPolicy {
    /// Largest radius a Space may have (meters).
    pub max_radius_m: f64,

    /// How far beyond its radius a Space is still shown as nearby (meters).
    pub nearby_reach_m: f64,
}

impl Default for RegionPolicy {
    fn default() -> Self {
        Self {
            max_radius_m: DEFAULT_MAX_RADIUS_M,
            nearby_reach_m: DEFAULT_NEARBY_REACH_M,
        }
    }
}

impl RegionPolicy {
    /// Cap a requested radius at the policy maximum.
    pub fn clamp_radius(&self, radius: f64) -> f64 {
        radius.min(self.max_radius_m)
    }

    /// Check that a region is usable for evaluation.
    pub fn validate(&self, region: &Region) -> Result<(), RegionError> {
        if region.id.is_empty() {
            return Err(RegionError::EmptyId);
        }
        if !region.radius.is_finite() || region.radius <= 0.0 {
            return Err(RegionError::InvalidRadius {
                id: region.id.clone(),
                radius: region.radius,
            });
        }
        Ok(())
    }

    /// Keep the regions within reach of `position`.
    ///
    /// A coarse pre-filter for picking regions of interest, preserving input
    /// order.
    pub fn nearby(&self, position: Position, regions: &[Region]) -> Vec<Region> {
        regions
            .iter()
            .filter(|r| r.distance_from(position) <= r.radius + self.nearby_reach_m)
            .cloned()
            .collect()
    }
}
