//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, drives the AI controllers, runs all systems, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ironclad_core::commands::PlayerCommand;
use ironclad_core::components::{PlayerTank, TankInfo, TankState};
use ironclad_core::constants::{REPLAN_MAX_SECS, REPLAN_MIN_SECS, TICK_RATE};
use ironclad_core::enums::MatchPhase;
use ironclad_core::events::EffectEvent;
use ironclad_core::nav::Pathfinder;
use ironclad_core::state::MatchSnapshot;
use ironclad_core::types::SimTime;

use crate::controller::{AiControllerSlot, ControllerIdentity, PlayerSeat};
use crate::nav::LinePathfinder;
use crate::scheduler::TaskSchedule;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    pathfinder: Box<dyn Pathfinder>,
    seat: PlayerSeat,
    controllers: HashMap<u32, AiControllerSlot>,
    next_controller_id: u32,
    next_tank_number: u32,
    schedule: TaskSchedule,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    effect_events: Vec<EffectEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the default pathfinder.
    pub fn new(config: SimConfig) -> Self {
        Self::with_pathfinder(config, Box::new(LinePathfinder::default()))
    }

    /// Create an engine with a caller-supplied pathfinding collaborator.
    pub fn with_pathfinder(config: SimConfig, pathfinder: Box<dyn Pathfinder>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            pathfinder,
            seat: PlayerSeat::default(),
            controllers: HashMap::new(),
            next_controller_id: 0,
            next_tank_number: 0,
            schedule: TaskSchedule::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            effect_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let effects = std::mem::take(&mut self.effect_events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.controllers, effects)
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Bind a fresh AI controller to `tank` and kick off its re-plan
    /// loop immediately. Returns the controller id.
    pub fn possess_ai(&mut self, tank: Entity) -> u32 {
        self.next_controller_id += 1;
        let id = self.next_controller_id;

        let mut slot = AiControllerSlot::new(id);
        slot.tank = Some(tank);
        let name = slot.display_name();
        self.controllers.insert(id, slot);

        if let Ok(info) = self.world.query_one_mut::<&mut TankInfo>(tank) {
            info.display_name = name;
        }

        self.run_replan(id);
        id
    }

    /// Release a controller's tank and cancel its pending re-plan task.
    pub fn unpossess(&mut self, id: u32) {
        if let Some(slot) = self.controllers.get_mut(&id) {
            slot.tank = None;
        }
        self.schedule.cancel(id);
    }

    /// Get a read-only reference to the controller slots.
    #[cfg(test)]
    pub fn controllers(&self) -> &HashMap<u32, AiControllerSlot> {
        &self.controllers
    }

    /// Whether a controller has a re-plan task pending.
    #[cfg(test)]
    pub fn replan_pending(&self, id: u32) -> bool {
        self.schedule.has_pending(id)
    }

    /// Kill a tank directly (for tests exercising match completion).
    #[cfg(test)]
    pub fn kill_tank(&mut self, tank_number: u32) {
        if let Some(entity) = self.find_tank(tank_number) {
            systems::tank::die(&mut self.world, entity, &mut self.effect_events);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch { ai_opponents } => {
                if matches!(self.phase, MatchPhase::Lobby | MatchPhase::Complete) {
                    self.start_match(ai_opponents);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::Drive { amount } => {
                if let Some(entity) = self.active_player_tank() {
                    systems::tank::drive(&mut self.world, entity, amount, self.time.dt());
                }
            }
            PlayerCommand::Turn { amount } => {
                if let Some(entity) = self.active_player_tank() {
                    systems::tank::turn(&mut self.world, entity, amount, self.time.dt());
                }
            }
            PlayerCommand::ChargeShot { rate } => {
                if let Some(entity) = self.active_player_tank() {
                    systems::tank::charge_shot(
                        &mut self.world,
                        entity,
                        rate,
                        self.time.dt(),
                        &mut self.effect_events,
                    );
                }
            }
            PlayerCommand::Fire => {
                if let Some(entity) = self.active_player_tank() {
                    systems::tank::fire(&mut self.world, entity, &mut self.effect_events);
                }
            }
            PlayerCommand::SetTankColor { color } => {
                if let Some(entity) = self.player_tank() {
                    if let Ok(info) = self.world.query_one_mut::<&TankInfo>(entity) {
                        self.effect_events.push(EffectEvent::ColorChanged {
                            tank_number: info.tank_number,
                            color,
                        });
                    }
                }
            }
            PlayerCommand::ResetTank { tank_number } => {
                if let Some(entity) = self.find_tank(tank_number) {
                    let name = self.resolve_display_name(entity);
                    systems::tank::setup_tank(&mut self.world, entity, name, &mut self.effect_events);
                }
            }
        }
    }

    /// Tear down any previous match and set up a fresh arena.
    fn start_match(&mut self, ai_opponents: u32) {
        self.world = World::new();
        self.controllers.clear();
        self.schedule = TaskSchedule::default();
        self.next_controller_id = 0;
        self.next_tank_number = 0;
        self.time = SimTime::default();
        self.phase = MatchPhase::Active;

        let (player, ai_tanks) = world_setup::setup_match(
            &mut self.world,
            &mut self.next_tank_number,
            ai_opponents,
        );

        let name = self.seat.display_name();
        systems::tank::setup_tank(&mut self.world, player, name, &mut self.effect_events);

        for entity in ai_tanks {
            let id = self.possess_ai(entity);
            let name = self
                .controllers
                .get(&id)
                .map(|slot| slot.display_name())
                .unwrap_or_default();
            systems::tank::setup_tank(&mut self.world, entity, name, &mut self.effect_events);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();
        let now_secs = self.time.elapsed_secs;

        // 1. Due re-plan timers
        for owner in self.schedule.drain_due(self.time.tick) {
            self.run_replan(owner);
        }
        // 2. AI controllers drive their tanks
        systems::ai::run(
            &mut self.world,
            &mut self.controllers,
            self.pathfinder.as_ref(),
            &mut self.rng,
            now_secs,
            dt,
            &mut self.effect_events,
        );
        // 3. Kinematic integration
        systems::movement::run(&mut self.world, dt);
        // 4. Motion-flag edge triggers
        systems::movement::update_motion_flags(&mut self.world, &mut self.effect_events);
        // 5. Overlap damage
        systems::overlap::run(&mut self.world, dt, &mut self.effect_events, &mut self.despawn_buffer);
        // 6. Shell cleanup (TTL, out of bounds)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Match result
        self.update_match_phase();
    }

    /// Re-plan one controller and schedule its next cycle. A stale task
    /// for an unbound controller is a no-op.
    fn run_replan(&mut self, id: u32) {
        let Some(slot) = self.controllers.get_mut(&id) else {
            return;
        };
        if slot.tank.is_none() {
            return;
        }

        slot.brain.replan(&mut self.rng);

        let delay_secs = self.rng.gen_range(REPLAN_MIN_SECS..=REPLAN_MAX_SECS);
        self.schedule
            .schedule(id, self.time.tick + delay_secs * TICK_RATE as u64);
    }

    /// Complete the match once at most one of the spawned tanks lives.
    fn update_match_phase(&mut self) {
        let mut total = 0;
        let mut alive = 0;
        for (_entity, state) in self.world.query_mut::<&TankState>() {
            total += 1;
            if state.alive {
                alive += 1;
            }
        }
        if total >= 2 && alive <= 1 {
            self.phase = MatchPhase::Complete;
        }
    }

    fn player_tank(&self) -> Option<Entity> {
        let mut query = self.world.query::<&PlayerTank>();
        query.iter().next().map(|(entity, _)| entity)
    }

    /// The player tank, but only while the match is running.
    fn active_player_tank(&self) -> Option<Entity> {
        if self.phase != MatchPhase::Active {
            return None;
        }
        self.player_tank()
    }

    fn find_tank(&self, tank_number: u32) -> Option<Entity> {
        let mut query = self.world.query::<&TankInfo>();
        query
            .iter()
            .find(|(_entity, info)| info.tank_number == tank_number)
            .map(|(entity, _)| entity)
    }

    /// Display-name fallback chain: possessing AI controller, then the
    /// player seat, then the tank's default identifier.
    fn resolve_display_name(&self, entity: Entity) -> String {
        for slot in self.controllers.values() {
            if slot.tank == Some(entity) {
                return slot.display_name();
            }
        }
        if self.world.get::<&PlayerTank>(entity).is_ok() {
            return self.seat.display_name();
        }
        self.world
            .get::<&TankInfo>(entity)
            .map(|info| format!("TANK {}", info.tank_number))
            .unwrap_or_default()
    }
}
