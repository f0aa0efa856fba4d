//! Pathfinding collaborator contract.
//!
//! The simulation consumes path planning as a black box: callers hand
//! over the agent profile, start, and goal, and receive either an
//! ordered waypoint sequence or an explicit failure. Failure is a
//! normal outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::constants::TANK_HIT_RADIUS;
use crate::types::Position;

/// Properties of the navigating agent the solver may account for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NavAgentProfile {
    /// Agent radius used for clearance checks.
    pub radius: f64,
}

impl Default for NavAgentProfile {
    fn default() -> Self {
        Self {
            radius: TANK_HIT_RADIUS,
        }
    }
}

/// Result of a path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// Ordered waypoints from start to goal. The first is typically the
    /// caller's current position.
    Found(Vec<Position>),
    /// No route exists between start and goal.
    Unreachable,
}

/// Synchronous path-planning service.
pub trait Pathfinder {
    fn find_path(&self, agent: &NavAgentProfile, start: Position, goal: Position) -> PathOutcome;
}
