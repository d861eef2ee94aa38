//! Geofencing engine.
//!
//! Evaluates a moving position against a changing set of circular regions
//! and reports when the user enters or leaves one of them.
//!
//! # Example
//!
//! ```
//! use spacefence::geo::Position;
//! use spacefence::geofence::{GeofenceEvaluator, Region};
//!
//! let mut evaluator = GeofenceEvaluator::with_defaults();
//! let regions = vec![Region::new("r1", "Dolores Park", Position::new(37.7596, -122.4269), 150.0)];
//!
//! let update = evaluator.update(Position::new(37.7598, -122.4270), &regions);
//! assert_eq!(update.entered[0].id, "r1");
//!
//! // Same position again: nothing new to report
//! assert!(evaluator.update(Position::new(37.7598, -122.4270), &regions).is_empty());
//! ```

mod classifier;
mod evaluator;
mod membership;
mod region;
mod shared;

pub use classifier::{
    classify, MembershipThresholds, DEFAULT_ENTRY_BUFFER_M, DEFAULT_EXIT_BUFFER_M,
};
pub use evaluator::{EdgeEvent, EdgeKind, GeofenceEvaluator, GeofenceHandler, GeofenceUpdate};
pub use membership::MembershipTable;
pub use region::{
    Region, RegionError, RegionPolicy, DEFAULT_MAX_RADIUS_M, DEFAULT_NEARBY_REACH_M,
};
pub use shared::SharedEvaluator;
