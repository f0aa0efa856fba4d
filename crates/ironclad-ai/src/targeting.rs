//! Facing and target-selection helpers.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use ironclad_core::constants::{AI_TURN_RATE, FACING_EPSILON_RAD, OPPONENT_SEARCH_RANGE};
use ironclad_core::math::angle_between;
use ironclad_core::types::Position;

/// Result of one facing-correction step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FacingUpdate {
    /// Whether the hull is within the facing tolerance of the target.
    pub aligned: bool,
    /// Turn command to issue this tick, if any.
    pub turn: Option<f64>,
}

/// Signed offset between the hull reference axis and the direction away
/// from `target`. Zero when the drive direction points at the target;
/// the 90 degree offset compensates for the hull-axis convention. Both
/// directions are normalized before comparison.
pub fn facing_offset(hull_axis: DVec2, from: Position, target: Position) -> f64 {
    let away = from.horizontal() - target.horizontal();
    angle_between(hull_axis, away) - FRAC_PI_2
}

/// One step of rotating onto `target`: a fixed-magnitude turn in the
/// correcting direction until the offset drops inside the tolerance,
/// then no turn at all.
pub fn rotate_to_face(hull_axis: DVec2, from: Position, target: Position) -> FacingUpdate {
    let angle = facing_offset(hull_axis, from, target);
    if angle.abs() > FACING_EPSILON_RAD {
        let turn = if angle > 0.0 {
            -AI_TURN_RATE
        } else {
            AI_TURN_RATE
        };
        FacingUpdate {
            aligned: false,
            turn: Some(turn),
        }
    } else {
        FacingUpdate {
            aligned: true,
            turn: None,
        }
    }
}

/// Index of the nearest candidate within the search ceiling, or `None`
/// when the slice is empty or everything is out of range.
pub fn closest_opponent(from: Position, candidates: &[Position]) -> Option<usize> {
    let mut closest = None;
    let mut closest_dist = OPPONENT_SEARCH_RANGE;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = from.range_to(candidate);
        if distance < closest_dist {
            closest_dist = distance;
            closest = Some(index);
        }
    }
    closest
}
