//! Random position sampling for demo scenarios.

use rand::Rng;

use super::{Position, MAX_LAT, MIN_LAT};

/// Approximate meters per degree of latitude used for sampling offsets.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Pick a uniformly distributed point within `radius_m` of `center`.
///
/// Uses `r = radius * sqrt(u)` so points are uniform over the disc area
/// rather than bunched at the center. The meter-to-degree conversion is a
/// flat approximation that slightly under-shoots the haversine distance,
/// so for centers between 80°S and 80°N samples stay within the radius at
/// Space-sized scales. Closer to the poles the flat conversion breaks down;
/// latitude is clamped to the pole and longitude wrapped into -180..180 so
/// the result is always a valid [`Position`].
pub fn random_position_within<R: Rng>(
    center: Position,
    radius_m: f64,
    rng: &mut R,
) -> Position {
    let r = radius_m * rng.random::<f64>().sqrt();
    let theta = rng.random::<f64>() * 2.0 * std::f64::consts::PI;

    let lat_scale = center.lat.to_radians().cos();

    let lat = center.lat + (r / METERS_PER_DEGREE) * theta.cos();
    let lng = center.lng + (r / (METERS_PER_DEGREE * lat_scale)) * theta.sin();

    Position {
        lat: lat.clamp(MIN_LAT, MAX_LAT),
        lng: wrap_lng(lng),
    }
}

fn wrap_lng(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}
