//! CLI command implementations.
//!
//! Commands:
//! - `distance`: great-circle distance between two points
//! - `replay`: run a scenario file through the evaluator
//! - `demo`: generate and replay a random walk around one Space
//! - `config`: show the effective configuration

pub mod common;
pub mod config;
pub mod demo;
pub mod distance;
pub mod replay;
