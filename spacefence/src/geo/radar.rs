//! Radar-plane projection.
//!
//! Places a target on a 0–100 square around the user so a radar view can
//! draw it without knowing anything about geography.

use super::{distance, Position, RadarPoint};

/// Center of the radar plane (the user's own position).
pub const RADAR_CENTER: f64 = 50.0;

/// Radius of the drawable ring on the radar plane.
pub const RADAR_RADIUS: f64 = 40.0;

/// Project `target` onto the radar plane centered on `user`.
///
/// The distance is normalized against `max_radius_m` and clamped to 1.0, so
/// anything beyond the range sits on the outer ring. The bearing uses raw
/// degree deltas (not a true great-circle bearing), which is fine at the
/// scale of a single Space.
pub fn to_radar_position(user: Position, target: Position, max_radius_m: f64) -> RadarPoint {
    let dx = target.lng - user.lng;
    let dy = target.lat - user.lat;

    let normalized = (distance(user, target) / max_radius_m).min(1.0);
    let angle = dy.atan2(dx);

    RadarPoint {
        x: RADAR_CENTER + normalized * RADAR_RADIUS * angle.cos(),
        y: RADAR_CENTER - normalized * RADAR_RADIUS * angle.sin(),
    }
}
