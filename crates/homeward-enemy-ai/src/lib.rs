//! Enemy behavior for HOMEWARD.
//!
//! Implements the enemy profile table and the pure chase, hit and
//! lifecycle functions the simulation applies to every enemy.

pub mod fsm;
pub mod profiles;

pub use homeward_core as core;

#[cfg(test)]
mod tests;
