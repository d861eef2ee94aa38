//! Spherical geometry for proximity checks.
//!
//! Distances are great-circle distances on a sphere of radius
//! [`EARTH_RADIUS_M`]. This is a simplification of the WGS84 ellipsoid that
//! is accurate enough for the tens-to-hundreds of meters a Space covers.
//!
//! None of the functions here validate their inputs. Latitudes outside
//! -90..=90 or longitudes outside -180..=180 produce a number, not an error.

mod radar;
mod sample;
mod types;

pub use radar::{to_radar_position, RADAR_CENTER, RADAR_RADIUS};
pub use sample::{random_position_within, METERS_PER_DEGREE};
pub use types::{Position, RadarPoint, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default buffer outside a radius before a point counts as beyond the boundary.
pub const DEFAULT_BOUNDARY_BUFFER_M: f64 = 50.0;

/// Great-circle distance between two positions in meters (haversine).
///
/// Symmetric for identical floating-point inputs, and exactly `0.0` when
/// `a == b`.
#[inline]
pub fn distance(a: Position, b: Position) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlng = (dlng / 2.0).sin();

    // sin² of a negated half-angle equals sin² of the positive one, and the
    // cosine product commutes, so swapping a and b yields the same bits.
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng;
    // Rounding can push near-antipodal h a hair past 1.0
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Whether `position` lies within `radius_m` of `center` (inclusive).
pub fn is_within_radius(position: Position, center: Position, radius_m: f64) -> bool {
    distance(position, center) <= radius_m
}

/// Whether `position` lies beyond `radius_m + buffer_m` of `center`.
pub fn is_outside_boundary(
    position: Position,
    center: Position,
    radius_m: f64,
    buffer_m: f64,
) -> bool {
    distance(position, center) > radius_m + buffer_m
}
