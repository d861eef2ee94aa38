//! SpaceFence - Geofencing for location-bounded Spaces
//!
//! This library decides when a moving user enters or leaves a Space: a
//! named circle on the map. Positions and region lists come from the caller;
//! the library reports transitions and leaves the side effects to it.
//!
//! - [`geo`]: spherical distance and related geometry
//! - [`geofence`]: hysteresis classification and the stateful evaluator
//! - [`config`]: INI configuration
//! - [`logging`]: tracing setup
//! - [`trace`]: recorded scenarios for replay

pub mod config;
pub mod geo;
pub mod geofence;
pub mod logging;
pub mod trace;
