//! Angle helpers shared by the rotation engine.

/// Reduces an angle in degrees into `[0, 360)` using floored modulo.
pub fn normalize_deg(angle_deg: i64) -> i64 {
    angle_deg.rem_euclid(360)
}

/// Converts integer degrees to radians.
pub(crate) fn deg_to_rad(angle_deg: i64) -> f64 {
    (angle_deg as f64).to_radians()
}
