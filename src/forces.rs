//! Pairwise force laws in display space
//!
//! All functions return the force acting on the first point. Distances are
//! floored at [`EPSILON`] before any division or logarithm so coincident
//! points produce bounded forces.

use nalgebra::Vector3;

/// Display-space vector
pub type Vec3 = Vector3<f64>;

/// Floor applied to distances and ideal lengths
pub const EPSILON: f64 = 1e-10;

/// Logarithmic spring between `pi` and `pj`
///
/// Magnitude is `constant * log2(dist / ideal)`, directed from `pi` toward
/// `pj`. It is positive (pulling together) when the pair is stretched beyond
/// `ideal` and negative (pushing apart) when compressed.
pub fn spring_force(pi: &Vec3, pj: &Vec3, ideal: f64, constant: f64) -> Vec3 {
    let delta = pj - pi;
    let Some(unit) = delta.try_normalize(EPSILON) else {
        return Vec3::zeros();
    };
    let dist = delta.norm().max(EPSILON);
    let magnitude = constant * (dist / (ideal + EPSILON)).log2();
    unit * magnitude
}

/// Inverse-square repulsion pushing `pi` away from `pj`
pub fn repulsive_force(pi: &Vec3, pj: &Vec3, constant: f64) -> Vec3 {
    let delta = pi - pj;
    let Some(unit) = delta.try_normalize(EPSILON) else {
        return Vec3::zeros();
    };
    let dist2 = delta.norm_squared().max(EPSILON);
    unit * (constant / dist2)
}

/// Linear drag opposing `velocity`
pub fn drag_force(velocity: &Vec3, constant: f64) -> Vec3 {
    velocity * (-constant)
}
