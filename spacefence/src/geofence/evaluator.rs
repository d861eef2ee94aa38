//! Stateful geofence evaluation with edge-triggered events.
//!
//! The evaluator is fed the user's position together with the full list of
//! regions of interest on every cycle. It classifies each region against its
//! previous membership and reports only the transitions.
//!
//! # Cycle
//!
//! ```text
//! for region in regions (supplied order):
//!     was  = table[region.id] or false
//!     now  = classify(position, region, was)
//!     was -> now:  false->true  = Entered
//!                  true->false  = Exited
//!     table[region.id] = now
//! drop table entries whose id was not supplied (no event)
//! ```
//!
//! Side effects (notifications, visit records) belong to the caller, either
//! by reading the returned [`GeofenceUpdate`] or through a
//! [`GeofenceHandler`].

use std::collections::HashSet;

use crate::geo::Position;

use super::classifier::{classify, MembershipThresholds};
use super::membership::MembershipTable;
use super::region::Region;

/// Kind of membership transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Outside to inside.
    Entered,
    /// Inside to outside.
    Exited,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Entered => write!(f, "entered"),
            EdgeKind::Exited => write!(f, "exited"),
        }
    }
}

/// A single membership transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeEvent {
    pub kind: EdgeKind,
    pub region_id: String,
    pub region_name: String,
}

/// Transitions produced by one evaluation cycle.
///
/// Both lists are in the order the regions were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeofenceUpdate {
    /// Regions entered this cycle.
    pub entered: Vec<Region>,
    /// Regions exited this cycle.
    pub exited: Vec<Region>,
}

impl GeofenceUpdate {
    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }

    /// Flatten into edge events, entries first.
    pub fn events(&self) -> Vec<EdgeEvent> {
        let entered = self.entered.iter().map(|r| (EdgeKind::Entered, r));
        let exited = self.exited.iter().map(|r| (EdgeKind::Exited, r));

        entered
            .chain(exited)
            .map(|(kind, region)| EdgeEvent {
                kind,
                region_id: region.id.clone(),
                region_name: region.name.clone(),
            })
            .collect()
    }

    /// Hand every transition to `handler`, entries first.
    pub fn dispatch<H: GeofenceHandler + ?Sized>(&self, handler: &mut H) {
        for region in &self.entered {
            handler.on_enter(region);
        }
        for region in &self.exited {
            handler.on_exit(region);
        }
    }
}

/// Receiver for geofence transitions.
///
/// Implementations perform the side effects (alerts, visit records). The
/// evaluator neither knows nor cares whether they succeed.
pub trait GeofenceHandler {
    /// Called once when a region is entered.
    fn on_enter(&mut self, region: &Region);

    /// Called once when a region is exited.
    fn on_exit(&mut self, region: &Region);
}

/// Tracks membership across evaluation cycles.
///
/// Not safe to mutate from several threads at once; wrap it in
/// [`super::SharedEvaluator`] or confine it to one task.
#[derive(Debug, Default)]
pub struct GeofenceEvaluator {
    thresholds: MembershipThresholds,
    membership: MembershipTable,
}

impl GeofenceEvaluator {
    /// Create an evaluator with the given thresholds.
    pub fn new(thresholds: MembershipThresholds) -> Self {
        Self {
            thresholds,
            membership: MembershipTable::new(),
        }
    }

    /// Create an evaluator with the default 300m / 50m buffers.
    pub fn with_defaults() -> Self {
        Self::new(MembershipThresholds::default())
    }

    /// Thresholds this evaluator was built with.
    pub fn thresholds(&self) -> &MembershipThresholds {
        &self.thresholds
    }

    /// Evaluate `position` against the complete current list of regions.
    ///
    /// If an identifier appears more than once, the first occurrence is used
    /// and the rest are ignored for this cycle.
    pub fn update(&mut self, position: Position, regions: &[Region]) -> GeofenceUpdate {
        let mut update = GeofenceUpdate::default();
        let mut present: HashSet<&str> = HashSet::with_capacity(regions.len());

        for region in regions {
            if !present.insert(region.id.as_str()) {
                tracing::trace!(region_id = %region.id, "Duplicate region identifier ignored");
                continue;
            }

            let was_inside = self.membership.get(&region.id).unwrap_or(false);
            let is_inside = classify(position, region, was_inside, &self.thresholds);

            if is_inside != was_inside {
                let kind = if is_inside {
                    update.entered.push(region.clone());
                    EdgeKind::Entered
                } else {
                    update.exited.push(region.clone());
                    EdgeKind::Exited
                };

                tracing::debug!(
                    region_id = %region.id,
                    region_name = %region.name,
                    %kind,
                    %position,
                    "Geofence transition"
                );
            }

            self.membership.set(&region.id, is_inside);
        }

        let vanished = self.membership.reconcile(&present);
        for (id, was_inside) in &vanished {
            tracing::debug!(region_id = %id, was_inside, "Region no longer supplied, dropping state");
        }

        tracing::trace!(
            regions = regions.len(),
            entered = update.entered.len(),
            exited = update.exited.len(),
            vanished = vanished.len(),
            "Geofence cycle complete"
        );

        update
    }

    /// Forget all membership state without emitting anything.
    pub fn reset(&mut self) {
        tracing::debug!(tracked = self.membership.len(), "Geofence state reset");
        self.membership.clear();
    }

    /// Identifiers of regions currently considered inside, sorted.
    pub fn inside_ids(&self) -> Vec<String> {
        self.membership.inside_ids()
    }

    /// Whether the region with `id` is currently considered inside.
    pub fn is_inside(&self, id: &str) -> bool {
        self.membership.get(id).unwrap_or(false)
    }

    /// Whether any region is currently considered inside.
    pub fn is_inside_any(&self) -> bool {
        self.membership.any_inside()
    }

    /// Number of regions with stored state.
    pub fn tracked_count(&self) -> usize {
        self.membership.len()
    }
}
