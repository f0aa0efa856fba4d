//! Scalar and angle helpers shared by the combat and AI code.

use glam::DVec2;

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`,
/// clamped to the output endpoints. The output range may be reversed
/// (`out_min > out_max`) for inverse mappings such as damage falloff.
pub fn map_range_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() < f64::EPSILON {
        return out_min;
    }
    let t = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + t * (out_max - out_min)
}

/// Unsigned angle between two directions in radians, in `[0, π]`.
/// Inputs are normalized before the dot product.
pub fn angle_between(a: DVec2, b: DVec2) -> f64 {
    let dot = a.normalize_or_zero().dot(b.normalize_or_zero());
    dot.clamp(-1.0, 1.0).acos()
}
