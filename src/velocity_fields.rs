//! Per-component velocity laws projected onto the line of sight.
//!
//! Each sub-model maps the sampled sightline geometry and the projection
//! operators to an ordered sequence of LOS velocities aligned with the `t`
//! array. All velocities are in m/s (the circular velocity enters the model
//! in m/s, see [`crate::galaxy_params::GalaxyParameters::v_circ_ms`]); the
//! sub-models are pure and independent: none mutates shared state or
//! another's output.

use itertools::izip;

use crate::constants::{
    Kpc, MeterPerSec, DELTA_STALL, DISK_SCALE_HEIGHT, ETA_STALL, WIND_SPEED_EXPONENT,
};
use crate::galaxy_params::GalaxyParameters;
use crate::geometry::hyperboloid_radius;
use crate::halo::HaloScales;
use crate::los::Sightline;
use crate::projection::Projection;
use crate::sightline_errors::SightlineError;

/// `sign(z)` with `sign(0) = 0`, encoding the bipolar up/down symmetry of
/// the wind. `f64::signum` maps 0 to 1 and would break the antisymmetry at
/// the disk plane.
fn bipolar_sign(z: f64) -> f64 {
    if z == 0.0 {
        0.0
    } else {
        z.signum()
    }
}

// -------------------------------------------------------------------------------------------------
// Stellar disk
// -------------------------------------------------------------------------------------------------

/// LOS velocity of the rotating stellar disk.
///
/// The in-plane circular speed is constant (= `v_circ`) and the
/// contribution falls off exponentially with height above the disk plane:
/// `vDisk(z) = v_c · exp(−|z| / Hv)` with `Hv = `[`DISK_SCALE_HEIGHT`],
/// projected through the azimuthal operator `p_φ`.
pub fn disk_los_velocity(
    sightline: &Sightline,
    projections: &[Projection],
    v_circ: MeterPerSec,
) -> Vec<MeterPerSec> {
    izip!(&sightline.points, projections)
        .map(|(point, proj)| v_circ * (-point.z.abs() / DISK_SCALE_HEIGHT).exp() * proj.p_phi)
        .collect()
}

// -------------------------------------------------------------------------------------------------
// Accretion disk
// -------------------------------------------------------------------------------------------------

/// Eccentric, Keplerian-like inflow confined to the annulus `[ρ1, ρ2]`.
///
/// `ρ1` is the accretion radius, `ρ2 = η_A · R_halo`; the orbit family has
/// eccentricity `e = (ρ2 − ρ1)/(ρ1 + ρ2)` and conserves the specific
/// angular momentum `h = ρ1 · v_c` of the inner circular orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccretionFlow {
    rho_inner: Kpc,
    eccentricity: f64,
    /// Specific angular momentum `ρ1 · v_c` (kpc · m/s)
    angular_momentum: f64,
    v_circ: MeterPerSec,
}

impl AccretionFlow {
    /// Build the flow for one parameter snapshot.
    ///
    /// Errors
    /// ------
    /// * [`SightlineError::InvalidAccretionExtent`] when the annulus is
    ///   empty (`ρ1 ≤ 0` or `ρ2 ≤ ρ1`), where the orbit family is undefined.
    pub fn new(
        accretion_radius: Kpc,
        eta_accretion: f64,
        r_halo: Kpc,
        v_circ: MeterPerSec,
    ) -> Result<Self, SightlineError> {
        let rho_inner = accretion_radius;
        let rho_outer = eta_accretion * r_halo;
        if rho_inner <= 0.0 || rho_outer <= rho_inner {
            return Err(SightlineError::InvalidAccretionExtent {
                inner: rho_inner,
                outer: rho_outer,
            });
        }
        let semi_major = 0.5 * (rho_inner + rho_outer);
        Ok(Self {
            rho_inner,
            eccentricity: (rho_outer - rho_inner) / (2.0 * semi_major),
            angular_momentum: rho_inner * v_circ,
            v_circ,
        })
    }

    /// Azimuthal speed `vφ(ρ) = h / ρ`.
    pub fn azimuthal_speed(&self, rho: Kpc) -> MeterPerSec {
        self.angular_momentum / rho
    }

    /// Radial speed `vρ(ρ) = v_c/(1+e) · √(e² − (1 − (e+1)·ρ1/ρ)²)`.
    ///
    /// The radicand is negative outside the annulus `[ρ1, ρ2]`, where no
    /// orbit of the family reaches: `None` is returned there instead of a
    /// real number derived from a negative radicand.
    pub fn radial_speed(&self, rho: Kpc) -> Option<MeterPerSec> {
        let e = self.eccentricity;
        let radicand = e * e - (1.0 - (e + 1.0) * self.rho_inner / rho).powi(2);
        if radicand < 0.0 {
            None
        } else {
            Some(self.v_circ / (1.0 + e) * radicand.sqrt())
        }
    }

    /// LOS velocity `vρ·p_ρ + vφ·p_φ` along a sampled sightline.
    ///
    /// Samples outside the annulus carry only the azimuthal term; the
    /// undefined radial term contributes nothing there.
    pub fn los_velocity(
        &self,
        sightline: &Sightline,
        projections: &[Projection],
    ) -> Vec<MeterPerSec> {
        izip!(&sightline.points, projections)
            .map(|(point, proj)| {
                let v_phi = self.azimuthal_speed(point.rho);
                let v_rho = self.radial_speed(point.rho).unwrap_or(0.0);
                v_rho * proj.p_rho + v_phi * proj.p_phi
            })
            .collect()
    }
}

/// LOS velocity of the accretion disk for one parameter snapshot.
pub fn accretion_los_velocity(
    sightline: &Sightline,
    projections: &[Projection],
    params: &GalaxyParameters,
    scales: &HaloScales,
) -> Result<Vec<MeterPerSec>, SightlineError> {
    let flow = AccretionFlow::new(
        params.accretion_radius,
        params.eta_accretion,
        scales.r_halo,
        params.v_circ_ms(),
    )?;
    Ok(flow.los_velocity(sightline, projections))
}

// -------------------------------------------------------------------------------------------------
// Biconical wind
// -------------------------------------------------------------------------------------------------

/// LOS velocity of the biconical wind.
///
/// The outflow is confined to a hyperboloidal skirt of waist `skirt_radius`
/// and asymptotic slope `tan θ_open`. The local flow fraction
/// `Γ(z, ρ) = |z|·ρ·tan²θ / (skirt² + z²·tan²θ)` tilts the flow between
/// the cylindrical-radial and vertical directions; the denominator is the
/// squared hyperboloid radius shared with the geometry builder. The wind
/// speed magnitude is the empirical scaling `v_c^0.8`.
///
/// Errors
/// ------
/// * [`SightlineError::DegenerateOpeningAngle`] for θ at 0° or 90° (the
///   tangent vanishes or diverges),
/// * [`SightlineError::NonPositiveSkirtRadius`] when the skirt waist
///   collapses (`Γ` is singular at the midplane).
pub fn wind_los_velocity(
    sightline: &Sightline,
    projections: &[Projection],
    params: &GalaxyParameters,
) -> Result<Vec<MeterPerSec>, SightlineError> {
    if params.opening_angle <= 0.0 || params.opening_angle >= 90.0 {
        return Err(SightlineError::DegenerateOpeningAngle(params.opening_angle));
    }
    if params.skirt_radius <= 0.0 {
        return Err(SightlineError::NonPositiveSkirtRadius(params.skirt_radius));
    }

    let slope = params.opening_angle_rad().tan();
    let v_wind = params.v_circ_ms().powf(WIND_SPEED_EXPONENT);

    Ok(izip!(&sightline.points, projections)
        .map(|(point, proj)| {
            let skirt = hyperboloid_radius(point.z, params.skirt_radius, slope);
            let flow_fraction = point.z.abs() * point.rho * slope * slope / (skirt * skirt);
            v_wind * (flow_fraction * proj.p_rho + bipolar_sign(point.z) * proj.p_z)
                / (1.0 + flow_fraction * flow_fraction).sqrt()
        })
        .collect())
}

// -------------------------------------------------------------------------------------------------
// Stalled halo outflow (dormant component)
// -------------------------------------------------------------------------------------------------

/// Logistic stalling envelope `S(r)`.
///
/// `S(r) = (1 + exp(−r_stall/δ)) / (1 + exp((r − r_stall)/δ))` with
/// `r_stall = η_stall · R_halo`: ≈ 1 well inside the stall radius, → 0
/// beyond it over a width `δ`.
pub fn stalling_envelope(r: Kpc, r_halo: Kpc) -> f64 {
    let r_stall = ETA_STALL * r_halo;
    (1.0 + (-r_stall / DELTA_STALL).exp()) / (1.0 + ((r - r_stall) / DELTA_STALL).exp())
}

/// LOS velocity of the stalled halo outflow: `√v_c · p_r · S(r)`.
///
/// Computed and exposed but **not** part of the assembled profile: the
/// reference composition keeps this component dormant.
pub fn stalled_outflow_los_velocity(
    sightline: &Sightline,
    projections: &[Projection],
    v_circ: MeterPerSec,
    r_halo: Kpc,
) -> Vec<MeterPerSec> {
    let v_r = v_circ.sqrt();
    izip!(&sightline.points, projections)
        .map(|(point, proj)| v_r * proj.p_r * stalling_envelope(point.r, r_halo))
        .collect()
}
