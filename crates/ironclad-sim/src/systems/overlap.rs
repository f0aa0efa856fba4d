//! Overlap resolution: damager entities striking tanks.
//!
//! Only entities carrying a `Damager` component hurt tanks; every other
//! overlap is ignored. A shell never strikes its own shooter and is
//! spent on the first hull it hits.

use hecs::{Entity, World};

use ironclad_core::components::{Damager, Projectile, TankInfo, TankState};
use ironclad_core::constants::TANK_HIT_RADIUS;
use ironclad_core::events::EffectEvent;
use ironclad_core::types::Position;

use super::tank;

pub fn run(
    world: &mut World,
    dt: f64,
    events: &mut Vec<EffectEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    // Collect hits under shared borrows; damage needs the world mutable.
    let mut hits: Vec<(Entity, Entity, Position, Damager)> = Vec::new();
    {
        let mut projectiles = world.query::<(&Projectile, &Damager, &Position)>();
        for (shell_entity, (projectile, damager, shell_pos)) in projectiles.iter() {
            let mut tanks = world.query::<(&TankInfo, &TankState, &Position)>();
            for (tank_entity, (info, state, tank_pos)) in tanks.iter() {
                if info.tank_number == projectile.shooter {
                    continue;
                }
                if !state.alive || !state.physics_enabled {
                    continue;
                }
                if shell_pos.range_to(tank_pos) <= TANK_HIT_RADIUS {
                    hits.push((tank_entity, shell_entity, *shell_pos, *damager));
                    break;
                }
            }
        }
    }

    for (tank_entity, shell_entity, source_pos, damager) in hits {
        tank::apply_damage(world, tank_entity, source_pos, &damager, dt, events);
        despawn_buffer.push(shell_entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
