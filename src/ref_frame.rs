//! Observer-frame rotation and line-of-sight direction cosines.
//!
//! The galaxy frame is fixed; the observer frame is reached by rotating
//! through the azimuthal angle `α` about the galaxy z axis and the polar
//! angle `β` about the intermediate y axis. Both outputs below are pure
//! functions of the same `(α, β)` pair and must always be derived from one
//! parameter snapshot; the pipeline computes them in a single place to
//! make mixing snapshots impossible.

use nalgebra::{Matrix3, Vector3};

use crate::constants::Radian;

/// Rotation matrix from the galaxy intrinsic frame to the observer frame.
///
/// ```text
/// M = [[cosβ·cosα, -sinα, sinβ·cosα],
///      [cosβ·sinα,  cosα, sinβ·sinα],
///      [-sinβ,        0,    cosβ  ]]
/// ```
pub fn observer_rotation(alpha: Radian, beta: Radian) -> Matrix3<f64> {
    let (sin_a, cos_a) = alpha.sin_cos();
    let (sin_b, cos_b) = beta.sin_cos();
    Matrix3::new(
        cos_b * cos_a,
        -sin_a,
        sin_b * cos_a,
        cos_b * sin_a,
        cos_a,
        sin_b * sin_a,
        -sin_b,
        0.0,
        cos_b,
    )
}

/// Direction cosines of the LOS expressed in galaxy coordinates.
///
/// `σ = (−cosβ·cosα, sinα, −sinβ·cosα)`; unit length by construction.
pub fn los_direction(alpha: Radian, beta: Radian) -> Vector3<f64> {
    let (sin_a, cos_a) = alpha.sin_cos();
    let (sin_b, cos_b) = beta.sin_cos();
    Vector3::new(-cos_b * cos_a, sin_a, -sin_b * cos_a)
}
