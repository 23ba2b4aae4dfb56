use thiserror::Error;

use crate::constants::{Degree, Kpc};

/// Domain errors of the kinematic model.
///
/// Every divide-by-zero or negative-radicand singularity of the closed-form
/// laws is surfaced here as an explicit variant instead of letting NaN or
/// infinity propagate into an assembled profile. Range clamping of the raw
/// slider values is the UI collaborator's job, not ours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SightlineError {
    #[error("halo concentration must be > 0, got {0}")]
    NonPositiveConcentration(f64),

    #[error("halo overdensity must be > 0, got {0}")]
    NonPositiveOverdensity(f64),

    #[error("parameter `{0}` is not finite")]
    NonFiniteInput(&'static str),

    #[error("wind opening angle must lie strictly between 0° and 90°, got {0}°")]
    DegenerateOpeningAngle(Degree),

    #[error("accretion flare angle must lie strictly between 0° and 90°, got {0}°")]
    DegenerateFlareAngle(Degree),

    #[error("wind skirt radius must be > 0 kpc, got {0}")]
    NonPositiveSkirtRadius(Kpc),

    #[error("accretion annulus is empty: inner radius {inner} kpc, outer radius {outer} kpc")]
    InvalidAccretionExtent { inner: Kpc, outer: Kpc },

    #[error("sightline sample at t = {t} kpc passes through the rotation axis or the origin")]
    DegenerateSightlineSample { t: Kpc },
}
