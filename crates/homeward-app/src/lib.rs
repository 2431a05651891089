//! Homeward presentation-side driver.
//!
//! This crate wires the headless session engine to input, rendering and
//! menu adapters, and runs the frame loop.

pub mod adapter;
pub mod autopilot;
pub mod demo;
pub mod game_loop;
pub mod log_renderer;
pub mod menu;
pub mod screens;

pub use homeward_core as core;
