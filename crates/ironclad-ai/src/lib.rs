//! Opponent AI for IRONCLAD.
//!
//! Implements the two-state behavior machine that drives AI tanks:
//! re-planned wander/pursuit navigation, facing control, and
//! opportunistic fire timing. Pure decision logic with no ECS
//! dependency; the sim applies the resulting orders.

pub mod fsm;
pub mod targeting;

pub use ironclad_core as core;

#[cfg(test)]
mod tests;
