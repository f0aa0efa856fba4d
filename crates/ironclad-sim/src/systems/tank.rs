//! Tank operations, the only mutators of a tank's combat state.
//!
//! Drive/turn/charge/fire are silently absorbed while control is
//! disabled; damage is gated on being alive. Effect hooks become
//! `EffectEvent`s pushed onto the engine's per-tick buffer, so a caller
//! can always invoke an operation and accept the no-op.

use glam::DVec3;
use hecs::{Entity, World};

use ironclad_core::components::{Damager, Orientation, Projectile, TankInfo, TankLoadout, TankState};
use ironclad_core::constants::*;
use ironclad_core::events::EffectEvent;
use ironclad_core::math::map_range_clamped;
use ironclad_core::types::{Position, Velocity};

/// Frame-rate normalization factor for impulse magnitudes.
pub fn frame_scale(dt: f64) -> f64 {
    dt / REFERENCE_FRAME_SECS
}

/// Forward/backward drive impulse along the tank's nose.
pub fn drive(world: &mut World, entity: Entity, amount: f64, dt: f64) {
    let Ok((state, orientation, velocity, loadout)) = world
        .query_one_mut::<(&TankState, &Orientation, &mut Velocity, &TankLoadout)>(entity)
    else {
        return;
    };
    if !state.control_enabled {
        return;
    }

    let impulse = amount * MOVE_IMPULSE * frame_scale(dt).powf(MOVE_FRAME_EXPONENT);
    let nose = orientation.nose();
    velocity.x += nose.x * impulse / loadout.mass;
    velocity.y += nose.y * impulse / loadout.mass;
}

/// Angular impulse about the vertical axis, positive = clockwise.
pub fn turn(world: &mut World, entity: Entity, amount: f64, dt: f64) {
    let Ok((state, orientation)) =
        world.query_one_mut::<(&TankState, &mut Orientation)>(entity)
    else {
        return;
    };
    if !state.control_enabled {
        return;
    }

    orientation.rate += amount * TURN_IMPULSE * frame_scale(dt).powf(TURN_FRAME_EXPONENT) / YAW_INERTIA;
}

/// Accumulate weapon charge. Reaching full charge fires immediately
/// within the same call, exactly once.
pub fn charge_shot(
    world: &mut World,
    entity: Entity,
    speed: f64,
    dt: f64,
    events: &mut Vec<EffectEvent>,
) {
    let fire_now;
    {
        let Ok((info, state, loadout)) =
            world.query_one_mut::<(&TankInfo, &mut TankState, &TankLoadout)>(entity)
        else {
            return;
        };
        if !state.control_enabled || speed <= CHARGE_INPUT_DEADZONE {
            return;
        }

        events.push(EffectEvent::ChargeIndicator {
            tank_number: info.tank_number,
            visible: true,
        });

        state.charge += speed * loadout.charge_rate * frame_scale(dt);
        fire_now = state.charge >= 1.0;
        if !fire_now {
            events.push(EffectEvent::ChargeBar {
                tank_number: info.tank_number,
                value: state.charge,
            });
        }
    }

    if fire_now {
        fire(world, entity, events);
    }
}

/// Fire a shell at the current charge level, then reset the charge.
pub fn fire(world: &mut World, entity: Entity, events: &mut Vec<EffectEvent>) {
    let spawn;
    {
        let Ok((info, state, loadout, position, orientation)) = world
            .query_one_mut::<(&TankInfo, &mut TankState, &TankLoadout, &Position, &Orientation)>(
                entity,
            )
        else {
            return;
        };
        if !state.control_enabled {
            return;
        }

        let (speed_min, speed_max) = loadout.shot_speed_range;
        let muzzle_speed = map_range_clamped(state.charge, 0.0, 1.0, speed_min, speed_max);

        let nose = orientation.nose();
        let origin = Position::new(
            position.x + nose.x * MUZZLE_OFFSET,
            position.y + nose.y * MUZZLE_OFFSET,
            position.z,
        );
        let velocity = Velocity::new(nose.x * muzzle_speed, nose.y * muzzle_speed, 0.0);

        state.charge = 0.0;
        events.push(EffectEvent::ChargeBar {
            tank_number: info.tank_number,
            value: 0.0,
        });
        events.push(EffectEvent::ChargeIndicator {
            tank_number: info.tank_number,
            visible: false,
        });
        events.push(EffectEvent::ShotFired {
            tank_number: info.tank_number,
            speed: muzzle_speed,
        });

        spawn = (
            origin,
            velocity,
            Damager {
                damage_multiplier: loadout.damage_multiplier,
                knockback_strength: loadout.knockback_strength,
            },
            info.tank_number,
        );
    }

    let (origin, velocity, damager, shooter) = spawn;
    world.spawn((
        Projectile {
            shooter,
            ttl_secs: PROJECTILE_TTL_SECS,
        },
        damager,
        origin,
        velocity,
    ));
}

/// Apply distance-falloff damage and knockback from a damager at
/// `source_pos`. Crossing below zero health kills the tank exactly once.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    source_pos: Position,
    damager: &Damager,
    dt: f64,
    events: &mut Vec<EffectEvent>,
) {
    let died;
    {
        let Ok((info, state, loadout, position, velocity)) = world
            .query_one_mut::<(&TankInfo, &mut TankState, &TankLoadout, &Position, &mut Velocity)>(
                entity,
            )
        else {
            return;
        };
        if !state.alive {
            return;
        }

        let distance = position.range_to(&source_pos);
        let (near, far) = loadout.damage_falloff_range;
        let damage = map_range_clamped(distance, near, far, 1.0, 0.0) * damager.damage_multiplier;

        state.health -= damage;
        events.push(EffectEvent::HealthBar {
            tank_number: info.tank_number,
            value: state.health,
        });

        // Knockback: lifted vector from the source to the hull, spun 180
        // degrees about vertical, so the push lands on the attacker's
        // side rather than away from it.
        let mut direction = position.as_dvec3() - source_pos.as_dvec3();
        direction.z = KNOCKBACK_LIFT;
        let direction = DVec3::new(-direction.x, -direction.y, direction.z).normalize_or_zero();

        let impulse = damager.knockback_strength * frame_scale(dt);
        velocity.x += direction.x * impulse;
        velocity.y += direction.y * impulse;
        velocity.z += direction.z * impulse;

        died = state.health < 0.0;
    }

    if died {
        die(world, entity, events);
    }
}

/// Mark the tank as dead. The entity is not despawned; death disables
/// control, physics, and overlap handling until the next setup.
pub fn die(world: &mut World, entity: Entity, events: &mut Vec<EffectEvent>) {
    let Ok((info, state)) = world.query_one_mut::<(&TankInfo, &mut TankState)>(entity) else {
        return;
    };
    if !state.alive {
        return;
    }

    state.alive = false;
    state.control_enabled = false;
    state.physics_enabled = false;
    state.is_moving = false;

    events.push(EffectEvent::DeathEffect {
        tank_number: info.tank_number,
    });
}

/// Reset a tank in place: full health, no charge, control and physics
/// back on, display name refreshed.
pub fn setup_tank(
    world: &mut World,
    entity: Entity,
    display_name: String,
    events: &mut Vec<EffectEvent>,
) {
    let Ok((info, state)) = world.query_one_mut::<(&mut TankInfo, &mut TankState)>(entity) else {
        return;
    };

    *state = TankState::ready();
    info.display_name = display_name;

    events.push(EffectEvent::HealthBar {
        tank_number: info.tank_number,
        value: 1.0,
    });
    events.push(EffectEvent::ChargeIndicator {
        tank_number: info.tank_number,
        visible: false,
    });
    events.push(EffectEvent::MovingStopped {
        tank_number: info.tank_number,
    });
}
