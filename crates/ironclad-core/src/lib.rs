//! Core types and definitions for the IRONCLAD arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, math utilities, and
//! constants. It has no dependency on any ECS or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod math;
pub mod nav;
pub mod state;
pub mod types;
