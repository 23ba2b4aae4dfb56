//! Line-of-sight parametrization and sampling.
//!
//! The sightline is the straight ray from the background QSO through the
//! galaxy, parametrized by the scalar `t` and sampled uniformly over
//! `[-R_halo, +R_halo]`. The QSO sits at impact parameter `R`, rotated by
//! the sightline angle `γ` in the observer frame; expressing the ray in
//! galaxy coordinates gives the `x(t), y(t), z(t)` below.

use nalgebra::Vector3;

use crate::constants::{Kpc, N_LOS_SAMPLES};
use crate::galaxy_params::GalaxyParameters;
use crate::halo::HaloScales;
use crate::ref_frame::los_direction;

/// One sample along the sightline, in galaxy coordinates (kpc).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightlinePoint {
    /// Sightline parameter
    pub t: Kpc,
    pub x: Kpc,
    pub y: Kpc,
    pub z: Kpc,
    /// Spherical radius √(R² + t²)
    pub r: Kpc,
    /// Cylindrical radius √(x² + y²)
    pub rho: Kpc,
}

/// A fully sampled sightline together with its LOS direction cosines.
///
/// Both fields derive from the same parameter snapshot; the struct is the
/// unit of atomic replacement: consumers never observe a `points` array
/// paired with a `sigma` from a different snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Sightline {
    pub points: Vec<SightlinePoint>,
    /// LOS direction cosines (σx, σy, σz) in galaxy coordinates
    pub sigma: Vector3<f64>,
}

impl Sightline {
    /// Sample the sightline with the fixed contract count of
    /// [`N_LOS_SAMPLES`] points.
    pub fn sample(params: &GalaxyParameters, scales: &HaloScales) -> Self {
        Self::sample_n(params, scales, N_LOS_SAMPLES)
    }

    /// Sample the sightline with an explicit point count (`n ≥ 2`).
    ///
    /// Exposed for configuration; output compatibility requires the default
    /// of [`N_LOS_SAMPLES`].
    pub fn sample_n(params: &GalaxyParameters, scales: &HaloScales, n: usize) -> Self {
        debug_assert!(n >= 2, "a sightline needs at least its two endpoints");

        let alpha = params.alpha_rad();
        let beta = params.beta_rad();
        let gamma = params.gamma_rad();
        let (sin_a, cos_a) = alpha.sin_cos();
        let (sin_b, cos_b) = beta.sin_cos();
        let (sin_g, cos_g) = gamma.sin_cos();
        let r_impact = params.impact_parameter;

        // Entry point of the ray (t = 0) in galaxy coordinates.
        let x0 = r_impact * (cos_g * cos_b * sin_a - sin_g * sin_b);
        let y0 = r_impact * cos_g * cos_a;
        let z0 = r_impact * (cos_g * sin_b * sin_a + sin_g * cos_b);

        let step = 2.0 * scales.r_halo / (n - 1) as f64;
        let points = (0..n)
            .map(|i| {
                let t = -scales.r_halo + step * i as f64;
                let x = x0 - t * cos_b * cos_a;
                let y = y0 + t * sin_a;
                let z = z0 - t * sin_b * cos_a;
                SightlinePoint {
                    t,
                    x,
                    y,
                    z,
                    r: (r_impact * r_impact + t * t).sqrt(),
                    rho: (x * x + y * y).sqrt(),
                }
            })
            .collect();

        Sightline {
            points,
            sigma: los_direction(alpha, beta),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `t` array, in sample order.
    pub fn t_values(&self) -> Vec<Kpc> {
        self.points.iter().map(|p| p.t).collect()
    }
}
