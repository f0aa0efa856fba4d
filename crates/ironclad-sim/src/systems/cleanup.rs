//! Cleanup system: removes expired and out-of-bounds shells.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use ironclad_core::components::Projectile;
use ironclad_core::constants::ARENA_HALF_EXTENT;
use ironclad_core::types::Position;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (projectile, position)) in world.query_mut::<(&Projectile, &Position)>() {
        if projectile.ttl_secs <= 0.0
            || position.x.abs() > ARENA_HALF_EXTENT
            || position.y.abs() > ARENA_HALF_EXTENT
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
