//! Core types and definitions for the HOMEWARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, collision masks, components, commands, snapshots, events,
//! tuning, and map data. It has no dependency on the ECS or any
//! presentation framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod map;
pub mod mask;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
