//! Profile assembly, the full kinematic pipeline.
//!
//! [`compute_profile`] runs the whole chain for one parameter snapshot:
//! validation → halo scales → sightline sampling → projection operators →
//! the three velocity components. The result is one [`VelocityProfile`]
//! value, replaced atomically: a charting collaborator can never observe a
//! `t` array paired with velocity arrays from a different snapshot.

use crate::constants::{Kpc, MeterPerSec};
use crate::galaxy_params::GalaxyParameters;
use crate::halo::HaloScales;
use crate::los::Sightline;
use crate::projection::project_sightline;
use crate::sightline_errors::SightlineError;
use crate::velocity_fields::{accretion_los_velocity, disk_los_velocity, wind_los_velocity};

/// Axis label for the independent variable handed to the charting
/// collaborator.
pub const X_AXIS_LABEL: &str = "t";

/// Axis label for the dependent variable handed to the charting
/// collaborator.
pub const Y_AXIS_LABEL: &str = "LOS Velocity (m/s)";

/// One component's LOS-velocity sequence, or the domain error that made it
/// uncomputable. A failing component never suppresses the others.
pub type ComponentProfile = Result<Vec<MeterPerSec>, SightlineError>;

/// The assembled LOS-velocity profile for one parameter snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityProfile {
    /// Sightline parameter values (kpc), shared by all components
    pub t: Vec<Kpc>,
    /// Rotating stellar disk
    pub disk: ComponentProfile,
    /// Flared accretion disk
    pub accretion: ComponentProfile,
    /// Biconical wind
    pub wind: ComponentProfile,
    /// Display hint for the charting collaborator: `(−v_c, +v_c)` in m/s.
    /// Values outside the range are valid and are not clipped in the data.
    pub y_range: (MeterPerSec, MeterPerSec),
}

impl VelocityProfile {
    /// `true` when all three components computed without a domain error.
    pub fn is_complete(&self) -> bool {
        self.disk.is_ok() && self.accretion.is_ok() && self.wind.is_ok()
    }
}

/// Run the full kinematic pipeline for one parameter snapshot.
///
/// Pipeline-level errors (non-finite inputs, halo singularities, a
/// degenerate sightline) fail the whole call; per-component domain errors
/// (wind opening angle, skirt radius, accretion annulus) are carried inside
/// the component's own [`ComponentProfile`].
///
/// The function is pure: calling it twice with the same snapshot yields
/// bit-identical output.
pub fn compute_profile(params: &GalaxyParameters) -> Result<VelocityProfile, SightlineError> {
    params.validate()?;
    let scales = HaloScales::from_parameters(params)?;
    let sightline = Sightline::sample(params, &scales);
    let projections = project_sightline(&sightline)?;
    let v_circ = params.v_circ_ms();

    Ok(VelocityProfile {
        t: sightline.t_values(),
        disk: Ok(disk_los_velocity(&sightline, &projections, v_circ)),
        accretion: accretion_los_velocity(&sightline, &projections, params, &scales),
        wind: wind_los_velocity(&sightline, &projections, params),
        y_range: (-v_circ, v_circ),
    })
}

#[cfg(test)]
mod profile_test {
    use super::*;
    use crate::constants::N_LOS_SAMPLES;

    #[test]
    fn test_components_are_aligned_and_finite() {
        let params = GalaxyParameters {
            alpha: 15.0,
            beta: 40.0,
            gamma: 10.0,
            ..Default::default()
        };
        let profile = compute_profile(&params).unwrap();

        assert!(profile.is_complete());
        assert_eq!(profile.t.len(), N_LOS_SAMPLES);
        for component in [&profile.disk, &profile.accretion, &profile.wind] {
            let values = component.as_ref().unwrap();
            assert_eq!(values.len(), profile.t.len());
            assert!(values.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_one_bad_component_does_not_suppress_the_others() {
        let params = GalaxyParameters {
            opening_angle: 90.0,
            ..Default::default()
        };
        let profile = compute_profile(&params).unwrap();

        assert!(profile.disk.is_ok());
        assert!(profile.accretion.is_ok());
        assert_eq!(
            profile.wind,
            Err(SightlineError::DegenerateOpeningAngle(90.0))
        );
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_pipeline_rejects_halo_singularities() {
        let params = GalaxyParameters {
            concentration: -1.0,
            ..Default::default()
        };
        assert_eq!(
            compute_profile(&params),
            Err(SightlineError::NonPositiveConcentration(-1.0))
        );
    }

    #[test]
    fn test_y_range_is_a_hint_not_a_clamp() {
        let params = GalaxyParameters::default();
        let profile = compute_profile(&params).unwrap();
        assert_eq!(profile.y_range, (-params.v_circ_ms(), params.v_circ_ms()));
        // the accretion azimuthal term h/ρ is unbounded near the axis;
        // nothing in the data may be clipped to the hint range
        let accretion = profile.accretion.as_ref().unwrap();
        assert!(accretion.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let params = GalaxyParameters {
            alpha: 72.0,
            beta: 33.0,
            gamma: 45.0,
            impact_parameter: 25.0,
            ..Default::default()
        };
        let first = compute_profile(&params).unwrap();
        let second = compute_profile(&params).unwrap();
        assert_eq!(first, second);
    }
}
