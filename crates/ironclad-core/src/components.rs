//! ECS components for hecs entities.
//!
//! Components are plain data structs with small accessors at most.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Combat state of one tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TankState {
    /// False once the tank has died; death is logical only.
    pub alive: bool,
    /// Gates every action method (drive/turn/charge/fire).
    pub control_enabled: bool,
    /// Gates kinematic integration and overlap checks.
    pub physics_enabled: bool,
    /// Health fraction; starts at 1.0, death below 0.
    pub health: f64,
    /// Weapon charge in [0, 1]; resets to 0 on every fire.
    pub charge: f64,
    /// Cached from speed each tick; drives start/stop effect hooks.
    pub is_moving: bool,
}

impl TankState {
    /// State of a freshly set-up tank.
    pub fn ready() -> Self {
        Self {
            alive: true,
            control_enabled: true,
            physics_enabled: true,
            health: 1.0,
            charge: 0.0,
            is_moving: false,
        }
    }
}

/// Per-tank tuning. The damage fields parameterize the projectiles this
/// tank fires, not the damage it receives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TankLoadout {
    /// Muzzle speed at zero and full charge.
    pub shot_speed_range: (f64, f64),
    /// Hit distance for full damage and for zero damage.
    pub damage_falloff_range: (f64, f64),
    /// Charge accumulation rate (fraction per reference frame).
    pub charge_rate: f64,
    /// Hull mass (drive impulse divisor).
    pub mass: f64,
    pub damage_multiplier: f64,
    pub knockback_strength: f64,
}

impl Default for TankLoadout {
    fn default() -> Self {
        Self {
            shot_speed_range: (DEFAULT_SHOT_SPEED_MIN, DEFAULT_SHOT_SPEED_MAX),
            damage_falloff_range: (DEFAULT_DAMAGE_FALLOFF_NEAR, DEFAULT_DAMAGE_FALLOFF_FAR),
            charge_rate: DEFAULT_CHARGE_RATE,
            mass: DEFAULT_TANK_MASS,
            damage_multiplier: DEFAULT_DAMAGE_MULTIPLIER,
            knockback_strength: DEFAULT_KNOCKBACK_STRENGTH,
        }
    }
}

/// Identity of one tank: arena-unique number and resolved display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankInfo {
    pub tank_number: u32,
    pub display_name: String,
}

/// Hull orientation: compass yaw (0 = North, clockwise) and yaw rate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
    /// Yaw rate in rad/s, positive = clockwise.
    pub rate: f64,
}

impl Orientation {
    /// Drive direction: the way impulses and projectiles go.
    pub fn nose(&self) -> DVec2 {
        DVec2::new(self.yaw.sin(), self.yaw.cos())
    }

    /// Hull reference axis, 90 degrees counter-clockwise off the nose.
    /// Facing computations measure against this axis.
    pub fn hull_axis(&self) -> DVec2 {
        DVec2::new(-self.yaw.cos(), self.yaw.sin())
    }
}

/// Anything that damages tanks on overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Damager {
    pub damage_multiplier: f64,
    pub knockback_strength: f64,
}

/// A fired shell in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Tank number of the firing tank; never damages its own shooter.
    pub shooter: u32,
    /// Remaining lifetime in seconds.
    pub ttl_secs: f64,
}

/// Marks the human-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTank;

/// Marks an AI-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AiTank;
