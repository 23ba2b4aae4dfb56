//! Direction-cosine projection operators.
//!
//! At each sightline sample the local radial, cylindrical-radial, azimuthal
//! and vertical unit vectors are projected onto the LOS direction `σ`.
//! These scalars are what turn a 3D velocity field into a 1D LOS-velocity
//! profile.

use nalgebra::Vector3;

use crate::constants::GEOM_EPS;
use crate::los::{Sightline, SightlinePoint};
use crate::sightline_errors::SightlineError;

/// Scalar projections of the local unit directions onto the LOS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Radial (spherical) projection `σ · r̂`
    pub p_r: f64,
    /// Cylindrical-radial projection `σ · ρ̂`
    pub p_rho: f64,
    /// Azimuthal projection `σ · φ̂`
    pub p_phi: f64,
    /// Vertical projection `σ · ẑ = σz`, constant across samples
    pub p_z: f64,
}

impl Projection {
    /// Evaluate the projection operators at one sample point.
    ///
    /// Errors
    /// ------
    /// * [`SightlineError::DegenerateSightlineSample`] when `ρ` or `r`
    ///   vanishes: the sightline passes through the rotation axis or the
    ///   origin and the cylindrical/spherical unit vectors are undefined.
    pub fn at(sigma: &Vector3<f64>, point: &SightlinePoint) -> Result<Self, SightlineError> {
        if point.rho <= GEOM_EPS || point.r <= GEOM_EPS {
            return Err(SightlineError::DegenerateSightlineSample { t: point.t });
        }
        let p_r =
            sigma.x * (point.x / point.r) + sigma.y * (point.y / point.r) + sigma.z * (point.z / point.r);
        let p_phi = sigma.y * (point.x / point.rho) - sigma.x * (point.y / point.rho);
        let p_rho = sigma.x * (point.x / point.rho) + sigma.y * (point.y / point.rho);
        Ok(Self {
            p_r,
            p_rho,
            p_phi,
            p_z: sigma.z,
        })
    }
}

/// Evaluate the projection operators along a whole sightline.
pub fn project_sightline(sightline: &Sightline) -> Result<Vec<Projection>, SightlineError> {
    sightline
        .points
        .iter()
        .map(|point| Projection::at(&sightline.sigma, point))
        .collect()
}
