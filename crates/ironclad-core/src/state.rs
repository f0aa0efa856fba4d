//! Match state snapshot: the complete visible state sent to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorState, MatchPhase};
use crate::events::EffectEvent;
use crate::types::{Position, SimTime};

/// Complete match state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub tanks: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    /// Effect events raised during this tick, fire-and-forget.
    pub effects: Vec<EffectEvent>,
}

/// One tank as visible on the arena display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankView {
    pub tank_number: u32,
    pub display_name: String,
    pub position: Position,
    /// Compass yaw in radians.
    pub yaw: f64,
    /// Speed (units/s).
    pub speed: f64,
    pub health: f64,
    pub charge: f64,
    pub alive: bool,
    pub is_moving: bool,
    /// Behavior state of the possessing AI controller, if any.
    pub behavior: Option<BehaviorState>,
}

/// One shell in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub shooter: u32,
    pub position: Position,
    pub speed: f64,
}
