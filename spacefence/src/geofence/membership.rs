//! Per-region membership state, keyed by region identifier.
//!
//! Entries appear the first time an identifier is seen and are dropped as
//! soon as it stops appearing in the supplied region list.

use std::collections::{HashMap, HashSet};

/// Membership state for every region seen in the most recent cycle.
#[derive(Debug, Default, Clone)]
pub struct MembershipTable {
    states: HashMap<String, bool>,
}

impl MembershipTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored state for `id`, or `None` if it has never been seen.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.states.get(id).copied()
    }

    /// Record the state for `id`.
    pub fn set(&mut self, id: &str, inside: bool) {
        match self.states.get_mut(id) {
            Some(state) => *state = inside,
            None => {
                self.states.insert(id.to_string(), inside);
            }
        }
    }

    /// Drop every entry whose identifier is not in `present`.
    ///
    /// Returns the identifiers that were dropped along with whether they were
    /// inside at the time. No events are derived from this; a region that
    /// vanished is gone, not exited.
    pub fn reconcile(&mut self, present: &HashSet<&str>) -> Vec<(String, bool)> {
        let vanished: Vec<String> = self
            .states
            .keys()
            .filter(|id| !present.contains(id.as_str()))
            .cloned()
            .collect();

        vanished
            .into_iter()
            .filter_map(|id| self.states.remove(&id).map(|inside| (id, inside)))
            .collect()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Identifiers currently inside, sorted.
    pub fn inside_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .states
            .iter()
            .filter(|(_, inside)| **inside)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Whether any tracked region is inside.
    pub fn any_inside(&self) -> bool {
        self.states.values().any(|inside| *inside)
    }

    /// Number of tracked regions, inside or not.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no regions are tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
