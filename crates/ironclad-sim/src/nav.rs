//! Default pathfinding collaborator.
//!
//! Real deployments plug a navmesh solver in through the `Pathfinder`
//! trait; the simulation ships a minimal line-of-travel implementation
//! that succeeds inside the arena and fails outside it.

use ironclad_core::constants::ARENA_HALF_EXTENT;
use ironclad_core::nav::{NavAgentProfile, PathOutcome, Pathfinder};
use ironclad_core::types::Position;

/// Straight two-point routes within the arena bounds.
pub struct LinePathfinder {
    pub half_extent: f64,
}

impl Default for LinePathfinder {
    fn default() -> Self {
        Self {
            half_extent: ARENA_HALF_EXTENT,
        }
    }
}

impl Pathfinder for LinePathfinder {
    fn find_path(&self, _agent: &NavAgentProfile, start: Position, goal: Position) -> PathOutcome {
        if goal.x.abs() > self.half_extent || goal.y.abs() > self.half_extent {
            return PathOutcome::Unreachable;
        }
        PathOutcome::Found(vec![start, goal])
    }
}
