//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the engine.

pub mod cleanup;
pub mod combat;
pub mod contact;
pub mod controls;
pub mod movement;
pub mod pickups;
pub mod snapshot;
pub mod timers;
pub mod wave_spawner;
