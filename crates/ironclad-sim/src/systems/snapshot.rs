//! Snapshot assembly: read-only view of the world for the frontend.

use std::collections::HashMap;

use hecs::{Entity, World};

use ironclad_core::components::{Orientation, Projectile, TankInfo, TankState};
use ironclad_core::enums::{BehaviorState, MatchPhase};
use ironclad_core::events::EffectEvent;
use ironclad_core::state::{MatchSnapshot, ProjectileView, TankView};
use ironclad_core::types::{Position, SimTime, Velocity};

use crate::controller::AiControllerSlot;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    controllers: &HashMap<u32, AiControllerSlot>,
    effects: Vec<EffectEvent>,
) -> MatchSnapshot {
    let behavior_by_tank: HashMap<Entity, BehaviorState> = controllers
        .values()
        .filter_map(|slot| slot.tank.map(|entity| (entity, slot.brain.state)))
        .collect();

    let mut tanks = Vec::new();
    {
        let mut query =
            world.query::<(&TankInfo, &TankState, &Position, &Velocity, &Orientation)>();
        for (entity, (info, state, position, velocity, orientation)) in query.iter() {
            tanks.push(TankView {
                tank_number: info.tank_number,
                display_name: info.display_name.clone(),
                position: *position,
                yaw: orientation.yaw,
                speed: velocity.speed(),
                health: state.health,
                charge: state.charge,
                alive: state.alive,
                is_moving: state.is_moving,
                behavior: behavior_by_tank.get(&entity).copied(),
            });
        }
    }
    tanks.sort_by_key(|tank| tank.tank_number);

    let mut projectiles = Vec::new();
    {
        let mut query = world.query::<(&Projectile, &Position, &Velocity)>();
        for (_entity, (projectile, position, velocity)) in query.iter() {
            projectiles.push(ProjectileView {
                shooter: projectile.shooter,
                position: *position,
                speed: velocity.speed(),
            });
        }
    }
    projectiles.sort_by(|a, b| {
        a.shooter
            .cmp(&b.shooter)
            .then(a.position.x.total_cmp(&b.position.x))
            .then(a.position.y.total_cmp(&b.position.y))
    });

    MatchSnapshot {
        time: *time,
        phase,
        tanks,
        projectiles,
        effects,
    }
}
