//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Action commands apply to the player-controlled tank.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Match control ---
    /// Start a match against the given number of AI opponents.
    StartMatch { ai_opponents: u32 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal).
    SetTimeScale { scale: f64 },

    // --- Tank control ---
    /// Drive forward (positive) or backward (negative) this tick.
    Drive { amount: f64 },
    /// Turn clockwise (positive) or counter-clockwise (negative).
    Turn { amount: f64 },
    /// Charge the shot at the given rate this tick.
    ChargeShot { rate: f64 },
    /// Fire at the current charge level.
    Fire,

    // --- Presentation & lifecycle ---
    /// Recolor the player's hull.
    SetTankColor { color: [f32; 3] },
    /// Re-arm a dead tank in place (respawn).
    ResetTank { tank_number: u32 },
}
