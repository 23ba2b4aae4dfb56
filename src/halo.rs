//! NFW-style halo scale radii.
//!
//! The virial radius follows from the overdensity criterion applied to an
//! NFW profile whose circular-velocity curve peaks at `v_c`: the peak sits
//! at `ξ` scale radii, which ties the measured `v_c` to the enclosed virial
//! mass through the mass normalization `A_C / A_ξ`. The formula is
//! evaluated in SI and converted back to kpc at the end.

use std::f64::consts::PI;

use crate::constants::{Kpc, MeterPerSec, A_XI, G_SI, M_PER_KPC, RHO_CRIT, XI};
use crate::galaxy_params::GalaxyParameters;
use crate::sightline_errors::SightlineError;

/// Compute the virial radius of the halo in kpc.
///
/// Arguments
/// ---------
/// * `overdensity`: overdensity factor Δ relative to the critical density.
/// * `concentration`: NFW concentration parameter c.
/// * `v_circ`: maximum circular velocity in **m/s**.
///
/// Return
/// ------
/// * `R_vir` in kpc, strictly positive and monotonically increasing in
///   `v_circ` for valid inputs.
///
/// Errors
/// ------
/// * [`SightlineError::NonPositiveConcentration`] for `c ≤ 0` (the
///   `ln(1+c)` term and the `ξ/c` division are singular),
/// * [`SightlineError::NonPositiveOverdensity`] for `Δ ≤ 0`,
/// * [`SightlineError::NonFiniteInput`] for any non-finite input.
pub fn virial_radius(
    overdensity: f64,
    concentration: f64,
    v_circ: MeterPerSec,
) -> Result<Kpc, SightlineError> {
    if !overdensity.is_finite() {
        return Err(SightlineError::NonFiniteInput("overdensity"));
    }
    if !concentration.is_finite() {
        return Err(SightlineError::NonFiniteInput("concentration"));
    }
    if !v_circ.is_finite() {
        return Err(SightlineError::NonFiniteInput("circular_velocity"));
    }
    if concentration <= 0.0 {
        return Err(SightlineError::NonPositiveConcentration(concentration));
    }
    if overdensity <= 0.0 {
        return Err(SightlineError::NonPositiveOverdensity(overdensity));
    }

    let a_c = (1.0 + concentration).ln() - concentration / (1.0 + concentration);
    let r_vir_m = (3.0 / (4.0 * PI * G_SI) * (XI / concentration) / (overdensity * RHO_CRIT)
        * (a_c / A_XI)
        * v_circ.powi(2))
    .sqrt();

    Ok(r_vir_m / M_PER_KPC)
}

/// Derived halo scale radii, computed once per parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloScales {
    /// Virial radius in kpc
    pub r_vir: Kpc,
    /// Halo radius `R_vir · η_H` in kpc
    pub r_halo: Kpc,
}

impl HaloScales {
    pub fn from_parameters(params: &GalaxyParameters) -> Result<Self, SightlineError> {
        let r_vir = virial_radius(
            params.overdensity,
            params.concentration,
            params.v_circ_ms(),
        )?;
        Ok(Self {
            r_vir,
            r_halo: r_vir * params.eta_halo,
        })
    }
}
