//! Recorded scenarios for replaying a walk through a set of Spaces.
//!
//! A scenario is a JSON document with the regions of interest and the
//! sequence of position fixes:
//!
//! ```json
//! {
//!   "regions": [
//!     { "id": "r1", "name": "Dolores Park", "center": { "lat": 37.7596, "lng": -122.4269 }, "radius": 150 }
//!   ],
//!   "positions": [
//!     { "lat": 37.7570, "lng": -122.4269 },
//!     { "lat": 37.7596, "lng": -122.4269 }
//!   ]
//! }
//! ```
//!
//! To model Spaces appearing and expiring mid-walk, use `steps` instead of
//! `positions`; each step may carry its own region list, falling back to the
//! top-level `regions` when it doesn't. `steps` wins when both are present.

mod scenario;

pub use scenario::{ReplayStep, Scenario, ScenarioStep, TraceError};
