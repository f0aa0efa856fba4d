//! AI drive system: runs each possessed controller's brain once per
//! tick and applies the resulting orders through the tank operations.
//!
//! Context is gathered under shared borrows, the brain is evaluated,
//! and orders are applied afterward to keep hecs borrows disjoint.

use std::collections::HashMap;

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use ironclad_ai::fsm::{TankOrders, TickContext};
use ironclad_ai::targeting;
use ironclad_core::components::{Orientation, TankState};
use ironclad_core::events::EffectEvent;
use ironclad_core::nav::{NavAgentProfile, Pathfinder};
use ironclad_core::types::Position;

use crate::controller::AiControllerSlot;
use crate::systems::tank;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    controllers: &mut HashMap<u32, AiControllerSlot>,
    pathfinder: &dyn Pathfinder,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    dt: f64,
    events: &mut Vec<EffectEvent>,
) {
    // Deterministic iteration order over controller ids.
    let mut ids: Vec<u32> = controllers.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        let Some(slot) = controllers.get_mut(&id) else {
            continue;
        };
        let Some(tank_entity) = slot.tank else {
            continue;
        };
        let Some((position, hull_axis)) = tank_view(world, tank_entity) else {
            continue;
        };

        let opponent = closest_opponent_position(world, tank_entity, position);

        let ctx = TickContext {
            position,
            hull_axis,
            now_secs,
            opponent,
            agent: NavAgentProfile::default(),
            pathfinder,
        };
        let orders = slot.brain.tick(&ctx, rng);
        apply_orders(world, tank_entity, &orders, dt, events);
    }
}

fn tank_view(world: &World, entity: Entity) -> Option<(Position, DVec2)> {
    let position = world.get::<&Position>(entity).ok()?;
    let orientation = world.get::<&Orientation>(entity).ok()?;
    Some((*position, orientation.hull_axis()))
}

/// Roster query: position of the nearest living tank other than the
/// requester, if any is in range.
fn closest_opponent_position(world: &World, this: Entity, from: Position) -> Option<Position> {
    let mut candidates = Vec::new();
    {
        let mut query = world.query::<(&TankState, &Position)>();
        for (entity, (state, position)) in query.iter() {
            if entity == this || !state.alive {
                continue;
            }
            candidates.push(*position);
        }
    }
    targeting::closest_opponent(from, &candidates).map(|index| candidates[index])
}

fn apply_orders(
    world: &mut World,
    entity: Entity,
    orders: &TankOrders,
    dt: f64,
    events: &mut Vec<EffectEvent>,
) {
    if let Some(amount) = orders.turn {
        tank::turn(world, entity, amount, dt);
    }
    if let Some(amount) = orders.drive {
        tank::drive(world, entity, amount, dt);
    }
    if let Some(order) = orders.fire {
        // Instantaneous charge-then-fire: the gradual accumulator is
        // bypassed, the control gate inside fire still applies.
        set_charge(world, entity, order.charge);
        tank::fire(world, entity, events);
    }
}

fn set_charge(world: &mut World, entity: Entity, charge: f64) {
    if let Ok(state) = world.query_one_mut::<&mut TankState>(entity) {
        state.charge = charge;
    }
}
