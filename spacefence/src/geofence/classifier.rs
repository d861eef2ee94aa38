//! Region membership classification with hysteresis.
//!
//! # Thresholds
//!
//! ```text
//! was outside:  inside if distance <= radius + entry_buffer
//! was inside:   inside if distance <= radius + exit_buffer
//! ```
//!
//! With the defaults (entry 300m, exit 50m) entry is generous, so an
//! approaching user is picked up early, while a user who stands on the ring
//! and jitters across it stays inside until they are a full exit buffer
//! beyond it.

use crate::geo::Position;

use super::region::Region;

/// Default entry buffer beyond a region's radius (meters).
pub const DEFAULT_ENTRY_BUFFER_M: f64 = 300.0;

/// Default exit buffer beyond a region's radius (meters).
pub const DEFAULT_EXIT_BUFFER_M: f64 = 50.0;

/// Entry and exit buffers added to a region's radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipThresholds {
    /// Buffer used while the region is not yet entered.
    pub entry_buffer_m: f64,

    /// Buffer used while the region is entered.
    pub exit_buffer_m: f64,
}

impl Default for MembershipThresholds {
    fn default() -> Self {
        Self {
            entry_buffer_m: DEFAULT_ENTRY_BUFFER_M,
            exit_buffer_m: DEFAULT_EXIT_BUFFER_M,
        }
    }
}

impl MembershipThresholds {
    /// Create thresholds from explicit buffers.
    pub fn new(entry_buffer_m: f64, exit_buffer_m: f64) -> Self {
        Self {
            entry_buffer_m,
            exit_buffer_m,
        }
    }

    /// Distance at or below which an outside user becomes inside.
    pub fn entry_threshold(&self, region: &Region) -> f64 {
        region.radius + self.entry_buffer_m
    }

    /// Distance beyond which an inside user becomes outside.
    pub fn exit_threshold(&self, region: &Region) -> f64 {
        region.radius + self.exit_buffer_m
    }

    /// Whether the buffers keep the documented ordering `entry > exit > 0`.
    ///
    /// Other combinations still classify deterministically, but with
    /// `exit >= entry` the band never separates arriving from leaving, and
    /// with `exit == 0` a user standing on the ring exits on the first
    /// outward jitter.
    pub fn is_ordered(&self) -> bool {
        self.entry_buffer_m > self.exit_buffer_m && self.exit_buffer_m > 0.0
    }
}

/// Decide whether `position` is inside `region` given its previous state.
pub fn classify(
    position: Position,
    region: &Region,
    was_inside: bool,
    thresholds: &MembershipThresholds,
) -> bool {
    let distance = region.distance_from(position);

    if was_inside {
        distance <= thresholds.exit_threshold(region)
    } else {
        distance <= thresholds.entry_threshold(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS_M;

    /// Position `meters` due east of the origin along the equator.
    fn east_of_origin(meters: f64) -> Position {
        Position::new(0.0, (meters / EARTH_RADIUS_M).to_degrees())
    }

    fn region_at_origin(radius: f64) -> Region {
        Region::new("r", "Test", Position::new(0.0, 0.0), radius)
    }

    #[test]
    fn test_default_thresholds() {
        let t = MembershipThresholds::default();
        assert_eq!(t.entry_buffer_m, 300.0);
        assert_eq!(t.exit_buffer_m, 50.0);
        assert!(t.entry_buffer_m > t.exit_buffer_m);
        assert!(t.exit_buffer_m > 0.0);
    }

    #[test]
    fn test_is_ordered() {
        assert!(MembershipThresholds::default().is_ordered());
        assert!(MembershipThresholds::new(100.0, 1.0).is_ordered());

        assert!(!MembershipThresholds::new(50.0, 50.0).is_ordered());
        assert!(!MembershipThresholds::new(30.0, 50.0).is_ordered());
        assert!(!MembershipThresholds::new(300.0, 0.0).is_ordered());
        assert!(!MembershipThresholds::new(0.0, 0.0).is_ordered());
    }

    #[test]
    fn test_threshold_values() {
        let t = MembershipThresholds::default();
        let r = region_at_origin(100.0);
        assert_eq!(t.entry_threshold(&r), 400.0);
        assert_eq!(t.exit_threshold(&r), 150.0);
    }

    #[test]
    fn test_entry_uses_entry_buffer() {
        let t = MembershipThresholds::default();
        let r = region_at_origin(100.0);

        assert!(classify(east_of_origin(50.0), &r, false, &t));
        assert!(classify(east_of_origin(390.0), &r, false, &t));
        assert!(!classify(east_of_origin(410.0), &r, false, &t));
    }

    #[test]
    fn test_exit_uses_exit_buffer() {
        let t = MembershipThresholds::default();
        let r = region_at_origin(100.0);

        // Hysteresis band: geometrically outside the ring but still inside
        assert!(classify(east_of_origin(140.0), &r, true, &t));
        assert!(!classify(east_of_origin(160.0), &r, true, &t));
    }

    #[test]
    fn test_on_the_ring_is_stable() {
        let t = MembershipThresholds::default();
        let r = region_at_origin(100.0);
        let p = east_of_origin(100.0);

        assert!(classify(p, &r, false, &t));
        assert!(classify(p, &r, true, &t));
    }

    #[test]
    fn test_custom_buffers() {
        let t = MembershipThresholds::new(0.0, 25.0);
        let r = region_at_origin(200.0);

        assert!(!classify(east_of_origin(210.0), &r, false, &t));
        assert!(classify(east_of_origin(210.0), &r, true, &t));
        assert!(!classify(east_of_origin(230.0), &r, true, &t));
    }
}
