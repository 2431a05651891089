//! Simulation engine for HOMEWARD.
//!
//! Owns the hecs ECS world, runs systems once per frame in a fixed order,
//! and produces GameStateSnapshots for the presentation layer.

pub mod controller;
pub mod engine;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::{SessionEngine, SimConfig};
pub use homeward_core as core;
