//! Thread-safe handle to a geofence evaluator.
//!
//! Position fixes and region refreshes may arrive from different threads.
//! A single lock around the whole evaluator is enough: one `update` is a few
//! distance computations per region.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::geo::Position;

use super::classifier::MembershipThresholds;
use super::evaluator::{GeofenceEvaluator, GeofenceUpdate};
use super::region::Region;

/// Cloneable, lock-guarded [`GeofenceEvaluator`].
#[derive(Debug, Clone, Default)]
pub struct SharedEvaluator {
    inner: Arc<Mutex<GeofenceEvaluator>>,
}

impl SharedEvaluator {
    /// Create a shared evaluator with the given thresholds.
    pub fn new(thresholds: MembershipThresholds) -> Self {
        Self::from_evaluator(GeofenceEvaluator::new(thresholds))
    }

    /// Wrap an existing evaluator, keeping its state.
    pub fn from_evaluator(evaluator: GeofenceEvaluator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(evaluator)),
        }
    }

    /// See [`GeofenceEvaluator::update`].
    pub fn update(&self, position: Position, regions: &[Region]) -> GeofenceUpdate {
        self.inner.lock().update(position, regions)
    }

    /// See [`GeofenceEvaluator::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// See [`GeofenceEvaluator::inside_ids`].
    pub fn inside_ids(&self) -> Vec<String> {
        self.inner.lock().inside_ids()
    }

    /// See [`GeofenceEvaluator::is_inside_any`].
    pub fn is_inside_any(&self) -> bool {
        self.inner.lock().is_inside_any()
    }
}
