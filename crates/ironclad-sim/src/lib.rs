//! Simulation engine for IRONCLAD.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces MatchSnapshots for the frontend. Completely headless.

pub mod controller;
pub mod engine;
pub mod nav;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use ironclad_core as core;
pub use engine::SimulationEngine;
