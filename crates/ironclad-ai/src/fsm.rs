//! Behavior state machine for AI-driven tanks.
//!
//! The brain alternates between `Fleeing` (pathfinding-driven travel
//! with opportunistic shots) and `Fighting` (face the closest opponent,
//! fire when aligned, back away). It emits `TankOrders` for the sim to
//! apply; it never touches entity state itself.

use glam::DVec2;
use rand::Rng;

use ironclad_core::constants::*;
use ironclad_core::enums::BehaviorState;
use ironclad_core::math::map_range_clamped;
use ironclad_core::nav::{NavAgentProfile, PathOutcome, Pathfinder};
use ironclad_core::types::Position;

use crate::targeting;

/// Mutable decision state of one AI controller.
#[derive(Debug, Clone)]
pub struct AiBrain {
    pub state: BehaviorState,
    /// Flee-state navigation goal, re-rolled every re-plan cycle.
    pub wander_point: Position,
    /// Whether to chase the closest opponent instead of wandering.
    pub pursue_opponent: bool,
    /// Simulation time of the last granted fire request.
    pub last_shot_secs: f64,
    /// Minimum interval before the next fire request is granted.
    pub min_shot_delay: f64,
}

impl Default for AiBrain {
    fn default() -> Self {
        Self {
            state: BehaviorState::default(),
            wander_point: Position::default(),
            pursue_opponent: true,
            last_shot_secs: 0.0,
            min_shot_delay: 0.0,
        }
    }
}

/// Everything the brain can see of the world on one tick.
pub struct TickContext<'a> {
    pub position: Position,
    /// Hull reference axis (90 degrees off the drive direction).
    pub hull_axis: DVec2,
    pub now_secs: f64,
    /// Position of the closest living opponent, if any.
    pub opponent: Option<Position>,
    pub agent: NavAgentProfile,
    pub pathfinder: &'a dyn Pathfinder,
}

/// Actions the brain wants applied to its tank this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TankOrders {
    pub drive: Option<f64>,
    pub turn: Option<f64>,
    pub fire: Option<FireOrder>,
}

/// An immediate charge-and-fire request at a target position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireOrder {
    pub target: Position,
    /// Charge level to fire at, bypassing gradual accumulation.
    pub charge: f64,
}

impl AiBrain {
    /// Re-plan cycle: roll a new wander point, toggle the behavior
    /// state, and re-roll the pursuit preference.
    pub fn replan<R: Rng>(&mut self, rng: &mut R) {
        self.wander_point = Position::new(
            rng.gen_range(-WANDER_HALF_EXTENT..=WANDER_HALF_EXTENT),
            rng.gen_range(-WANDER_HALF_EXTENT..=WANDER_HALF_EXTENT),
            0.0,
        );
        self.toggle_state();
        self.pursue_opponent = rng.gen_range(0..100) < PURSUE_CHANCE_PERCENT;
    }

    /// Per-tick dispatch on the current behavior state.
    pub fn tick<R: Rng>(&mut self, ctx: &TickContext<'_>, rng: &mut R) -> TankOrders {
        match self.state {
            BehaviorState::Fleeing => self.drive_tick(ctx, rng),
            BehaviorState::Fighting => self.defense_tick(ctx, rng),
        }
    }

    fn toggle_state(&mut self) {
        self.state = match self.state {
            BehaviorState::Fleeing => BehaviorState::Fighting,
            BehaviorState::Fighting => BehaviorState::Fleeing,
        };
    }

    /// Fleeing: navigate toward the wander point or the pursued
    /// opponent, shooting when the hull happens to line up.
    fn drive_tick<R: Rng>(&mut self, ctx: &TickContext<'_>, rng: &mut R) -> TankOrders {
        let mut orders = TankOrders::default();

        let goal = match ctx.opponent {
            Some(opponent) if self.pursue_opponent => {
                // Already on top of the pursued opponent: stop fleeing
                // and fight. The goal of the request below was fixed
                // before this check and stays as chosen.
                if opponent.range_to(&ctx.position) < ENGAGE_RANGE {
                    self.toggle_state();
                }
                opponent
            }
            _ => self.wander_point,
        };

        match ctx.pathfinder.find_path(&ctx.agent, ctx.position, goal) {
            PathOutcome::Unreachable => {
                self.state = BehaviorState::Fighting;
                return orders;
            }
            PathOutcome::Found(points) => {
                if points.len() > 1 {
                    let facing = targeting::rotate_to_face(ctx.hull_axis, ctx.position, points[1]);
                    orders.turn = facing.turn;

                    // Slow down on approach to the waypoint.
                    let dist = ctx.position.range_to(&points[1]);
                    orders.drive = Some(map_range_clamped(
                        dist,
                        0.0,
                        DRIVE_SPEED_DISTANCE_MAX,
                        DRIVE_SPEED_MIN,
                        DRIVE_SPEED_MAX,
                    ));

                    // Final leg and nearly there: destination reached.
                    if points.len() == 2 && dist < WAYPOINT_REACHED_RANGE {
                        self.toggle_state();
                    }
                }
            }
        }

        if let Some(opponent) = ctx.opponent {
            let offset = targeting::facing_offset(ctx.hull_axis, ctx.position, opponent);
            if offset.abs() < FACING_EPSILON_RAD {
                orders.fire = self.request_fire(ctx.position, opponent, ctx.now_secs, rng);
            }
        }

        orders
    }

    /// Fighting: rotate onto the closest opponent, fire when aligned,
    /// and back away the whole time.
    fn defense_tick<R: Rng>(&mut self, ctx: &TickContext<'_>, rng: &mut R) -> TankOrders {
        let mut orders = TankOrders::default();
        let Some(opponent) = ctx.opponent else {
            return orders;
        };

        let facing = targeting::rotate_to_face(ctx.hull_axis, ctx.position, opponent);
        orders.turn = facing.turn;
        if facing.aligned {
            orders.fire = self.request_fire(ctx.position, opponent, ctx.now_secs, rng);
        }

        orders.drive = Some(KITE_DRIVE);
        orders
    }

    /// Gated fire request. Grants at most one fire per `min_shot_delay`
    /// window; on success the delay is re-rolled with a charge-dependent
    /// floor, so weak close-range shots come more often.
    pub fn request_fire<R: Rng>(
        &mut self,
        from: Position,
        target: Position,
        now_secs: f64,
        rng: &mut R,
    ) -> Option<FireOrder> {
        if now_secs - self.last_shot_secs <= self.min_shot_delay {
            return None;
        }

        let charge = map_range_clamped(
            from.range_to(&target),
            POWER_DISTANCE_MIN,
            POWER_DISTANCE_MAX,
            AI_CHARGE_MIN,
            AI_CHARGE_MAX,
        );
        self.last_shot_secs = now_secs;

        let floor = map_range_clamped(
            charge,
            AI_SHOT_CHARGE_LOW,
            AI_SHOT_CHARGE_HIGH,
            AI_SHOT_DELAY_FLOOR_MIN,
            AI_SHOT_DELAY_MAX_SECS,
        );
        self.min_shot_delay = rng.gen_range(floor..=AI_SHOT_DELAY_MAX_SECS);

        Some(FireOrder { target, charge })
    }
}
