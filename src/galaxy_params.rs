//! Immutable parameter snapshot consumed from the UI collaborator.
//!
//! The UI hands the core one [`GalaxyParameters`] value per change, replaced
//! wholesale and never mutated in place. Angle fields are in **degrees** at
//! this boundary and converted to radians by the accessor methods before
//! entering any formula; no internal function accepts degrees.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, KmPerSec, Kpc, MeterPerSec, Radian, KM_TO_M, RADEG};
use crate::sightline_errors::SightlineError;

/// One complete snapshot of the user-adjustable model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalaxyParameters {
    /// Observer azimuthal angle
    pub alpha: Degree,
    /// Observer polar angle
    pub beta: Degree,
    /// QSO sightline angle with the observer y axis (counterclockwise)
    pub gamma: Degree,
    /// QSO impact parameter in kpc
    pub impact_parameter: Kpc,
    /// Halo overdensity factor Δ
    pub overdensity: f64,
    /// Halo concentration parameter c
    pub concentration: f64,
    /// Maximum circular velocity in km/s
    pub circular_velocity: KmPerSec,
    /// Halo radius as a fraction of the virial radius
    pub eta_halo: f64,
    /// Wind skirt (waist) radius in kpc
    pub skirt_radius: Kpc,
    /// Wind opening angle
    pub opening_angle: Degree,
    /// Wind vertical extent as a fraction of the virial radius
    pub eta_wind: f64,
    /// Stellar disk radius in kpc
    pub disk_radius: Kpc,
    /// Stellar disk height in kpc
    pub disk_height: Kpc,
    /// Accretion disk inner radius in kpc
    pub accretion_radius: Kpc,
    /// Accretion disk flare angle
    pub flare_angle: Degree,
    /// Accretion outer radius as a fraction of the halo radius
    pub eta_accretion: f64,
}

impl Default for GalaxyParameters {
    /// Initial slider values of the UI collaborator.
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            gamma: 0.0,
            impact_parameter: 10.0,
            overdensity: 200.0,
            concentration: 10.0,
            circular_velocity: 200.0,
            eta_halo: 1.0,
            skirt_radius: 5.0,
            opening_angle: 45.0,
            eta_wind: 1.0,
            disk_radius: 15.0,
            disk_height: 2.0,
            accretion_radius: 10.0,
            flare_angle: 45.0,
            eta_accretion: 1.0,
        }
    }
}

impl GalaxyParameters {
    pub fn alpha_rad(&self) -> Radian {
        self.alpha * RADEG
    }

    pub fn beta_rad(&self) -> Radian {
        self.beta * RADEG
    }

    pub fn gamma_rad(&self) -> Radian {
        self.gamma * RADEG
    }

    pub fn opening_angle_rad(&self) -> Radian {
        self.opening_angle * RADEG
    }

    pub fn flare_angle_rad(&self) -> Radian {
        self.flare_angle * RADEG
    }

    /// Circular velocity converted to m/s.
    ///
    /// The m/s value feeds both the SI virial-radius derivation and every
    /// velocity law, so the assembled profile is in m/s while lengths stay
    /// in kpc. The mixing is intentional and matches the reference model.
    pub fn v_circ_ms(&self) -> MeterPerSec {
        self.circular_velocity * KM_TO_M
    }

    /// Reject snapshots that cannot enter the pipeline at all.
    ///
    /// Non-finite fields and the halo log/division singularities are caught
    /// here; per-component singularities (opening angle, skirt radius,
    /// accretion annulus) are reported by the component that owns them so
    /// one bad component does not suppress the others.
    pub fn validate(&self) -> Result<(), SightlineError> {
        let fields: [(&'static str, f64); 16] = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("impact_parameter", self.impact_parameter),
            ("overdensity", self.overdensity),
            ("concentration", self.concentration),
            ("circular_velocity", self.circular_velocity),
            ("eta_halo", self.eta_halo),
            ("skirt_radius", self.skirt_radius),
            ("opening_angle", self.opening_angle),
            ("eta_wind", self.eta_wind),
            ("disk_radius", self.disk_radius),
            ("disk_height", self.disk_height),
            ("accretion_radius", self.accretion_radius),
            ("flare_angle", self.flare_angle),
            ("eta_accretion", self.eta_accretion),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SightlineError::NonFiniteInput(name));
            }
        }
        if self.concentration <= 0.0 {
            return Err(SightlineError::NonPositiveConcentration(self.concentration));
        }
        if self.overdensity <= 0.0 {
            return Err(SightlineError::NonPositiveOverdensity(self.overdensity));
        }
        Ok(())
    }
}
