//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// AI controller behavior state.
///
/// `Fighting` is the deterministic initial value; a freshly possessed
/// controller re-plans immediately, which toggles it once, so the first
/// full cycle runs `Fleeing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Navigate away via pathfinding, shooting opportunistically.
    Fleeing,
    /// Hold ground, face the closest opponent, and kite backward.
    #[default]
    Fighting,
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Lobby,
    Active,
    Paused,
    /// At most one tank left alive.
    Complete,
}
