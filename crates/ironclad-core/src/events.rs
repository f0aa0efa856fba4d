//! Events emitted by the simulation for visual and audio feedback.
//!
//! These replace direct effect-hook calls: the frontend consumes them
//! fire-and-forget from each snapshot.

use serde::{Deserialize, Serialize};

/// Effect events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// Tank speed crossed above the moving threshold.
    MovingStarted { tank_number: u32 },
    /// Tank speed crossed back below the moving threshold.
    MovingStopped { tank_number: u32 },
    /// Tank died; play the death effect.
    DeathEffect { tank_number: u32 },
    /// Health bar value changed.
    HealthBar { tank_number: u32, value: f64 },
    /// Charge bar value changed.
    ChargeBar { tank_number: u32, value: f64 },
    /// Charge indicator shown or hidden.
    ChargeIndicator { tank_number: u32, visible: bool },
    /// Hull color changed (RGB in [0, 1]).
    ColorChanged { tank_number: u32, color: [f32; 3] },
    /// A shell left the muzzle at the given speed.
    ShotFired { tank_number: u32, speed: f64 },
}
