//! Entity spawn factories for setting up the arena.

use hecs::{Entity, World};

use ironclad_core::components::{AiTank, Orientation, PlayerTank, TankInfo, TankLoadout, TankState};
use ironclad_core::constants::SPAWN_RING_RADIUS;
use ironclad_core::types::{Position, Velocity};

/// Spawn the player tank at the origin and `ai_opponents` tanks spread
/// around a ring, each facing the center. Possession is the engine's
/// job; the factory only creates entities.
pub fn setup_match(
    world: &mut World,
    next_tank_number: &mut u32,
    ai_opponents: u32,
) -> (Entity, Vec<Entity>) {
    let player = spawn_tank(world, next_tank_number, Position::new(0.0, 0.0, 0.0), 0.0);
    let _ = world.insert_one(player, PlayerTank);

    let mut ai_tanks = Vec::with_capacity(ai_opponents as usize);
    for i in 0..ai_opponents {
        let bearing = std::f64::consts::TAU * i as f64 / ai_opponents as f64;
        let position = Position::new(
            SPAWN_RING_RADIUS * bearing.sin(),
            SPAWN_RING_RADIUS * bearing.cos(),
            0.0,
        );
        // Nose toward the arena center.
        let yaw = (bearing + std::f64::consts::PI).rem_euclid(std::f64::consts::TAU);

        let entity = spawn_tank(world, next_tank_number, position, yaw);
        let _ = world.insert_one(entity, AiTank);
        ai_tanks.push(entity);
    }

    (player, ai_tanks)
}

/// Spawn a single ready-to-fight tank.
pub fn spawn_tank(
    world: &mut World,
    next_tank_number: &mut u32,
    position: Position,
    yaw: f64,
) -> Entity {
    *next_tank_number += 1;
    let tank_number = *next_tank_number;

    world.spawn((
        TankInfo {
            tank_number,
            display_name: format!("TANK {tank_number}"),
        },
        TankState::ready(),
        TankLoadout::default(),
        position,
        Velocity::default(),
        Orientation { yaw, rate: 0.0 },
    ))
}
