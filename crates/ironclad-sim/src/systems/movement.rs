//! Kinematic integration and motion-flag tracking.
//!
//! Minimal stand-in for a physics engine: velocities integrate into
//! positions with exponential damping, knocked-up hulls fall back to
//! the ground plane, and shells fly straight.

use hecs::World;

use ironclad_core::components::{Orientation, Projectile, TankInfo, TankState};
use ironclad_core::constants::*;
use ironclad_core::events::EffectEvent;
use ironclad_core::types::{Position, Velocity};

/// Integrate all moving entities by one tick.
pub fn run(world: &mut World, dt: f64) {
    // Tanks: velocity and yaw rate, with ground friction.
    for (_entity, (state, position, velocity, orientation)) in
        world.query_mut::<(&TankState, &mut Position, &mut Velocity, &mut Orientation)>()
    {
        if !state.physics_enabled {
            continue;
        }

        position.x += velocity.x * dt;
        position.y += velocity.y * dt;
        position.z += velocity.z * dt;
        orientation.yaw = (orientation.yaw + orientation.rate * dt).rem_euclid(std::f64::consts::TAU);

        if position.z > 0.0 {
            velocity.z -= GRAVITY * dt;
        }
        if position.z <= 0.0 {
            position.z = 0.0;
            if velocity.z < 0.0 {
                velocity.z = 0.0;
            }
        }

        velocity.x *= LINEAR_DAMPING;
        velocity.y *= LINEAR_DAMPING;
        orientation.rate *= ANGULAR_DAMPING;
    }

    // Shells: straight flight, burning lifetime.
    for (_entity, (projectile, position, velocity)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        position.x += velocity.x * dt;
        position.y += velocity.y * dt;
        position.z += velocity.z * dt;
        projectile.ttl_secs -= dt;
    }
}

/// Edge-triggered moving started/stopped effects: one event per
/// threshold crossing, none while the speed stays on one side.
pub fn update_motion_flags(world: &mut World, events: &mut Vec<EffectEvent>) {
    for (_entity, (info, state, velocity)) in
        world.query_mut::<(&TankInfo, &mut TankState, &Velocity)>()
    {
        if !state.alive {
            continue;
        }

        let moving = velocity.speed() > MOVING_SPEED_THRESHOLD;
        if moving && !state.is_moving {
            state.is_moving = true;
            events.push(EffectEvent::MovingStarted {
                tank_number: info.tank_number,
            });
        } else if !moving && state.is_moving {
            state.is_moving = false;
            events.push(EffectEvent::MovingStopped {
                tank_number: info.tank_number,
            });
        }
    }
}
