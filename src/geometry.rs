//! Shape descriptors and point clouds for the rendering collaborator.
//!
//! The geometry builder re-derives the halo scales from the same
//! [`crate::halo`] formulas the kinematics use and packages the component
//! shapes as parametric descriptors: a sphere for the halo, a cylinder for
//! the stellar disk, and hyperboloid sheets for the wind and the flared
//! accretion disk. Point clouds fill the shapes for visual density effects;
//! the RNG is passed in so callers can seed deterministically.
//!
//! This module is a one-way consumer of the halo output; nothing here
//! feeds back into the velocity computation.

use std::f64::consts::TAU;

use nalgebra::Vector3;
use rand::Rng;

use crate::constants::Kpc;
use crate::galaxy_params::GalaxyParameters;
use crate::halo::HaloScales;
use crate::sightline_errors::SightlineError;

/// Radius of a hyperboloid sheet at height `z`:
/// `√(waist² + z²·slope²)`.
///
/// This is the single shared shape formula: the wind velocity law divides
/// by its square (the skirt confinement) and the geometry builder sweeps it
/// into a surface of revolution.
pub fn hyperboloid_radius(z: Kpc, waist: Kpc, slope: f64) -> Kpc {
    (waist * waist + z * z * slope * slope).sqrt()
}

/// Spherical halo shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereShell {
    pub radius: Kpc,
}

/// Stellar disk cylinder, aligned with the galaxy z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskCylinder {
    pub radius: Kpc,
    pub height: Kpc,
}

/// Hyperboloid sheet of revolution about the galaxy z axis.
///
/// Describes both the biconical wind skirt (`slope = tan θ_open`) and the
/// flared accretion disk (`slope = cot θ_flare`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperboloidSheet {
    /// Waist radius at z = 0 (kpc)
    pub waist: Kpc,
    /// Asymptotic radial growth per unit height
    pub slope: f64,
    /// Vertical half-extent (kpc)
    pub half_height: Kpc,
}

impl HyperboloidSheet {
    pub fn radius_at(&self, z: Kpc) -> Kpc {
        hyperboloid_radius(z, self.waist, self.slope)
    }

    /// Parametric surface map for mesh generation.
    ///
    /// `u ∈ [0, 1]` sweeps the azimuth over `[0, 2π]`; `v ∈ [0, 1]` sweeps
    /// the height over `[-half_height, +half_height]` (clamped).
    pub fn point_at(&self, u: f64, v: f64) -> Vector3<f64> {
        let phi = u * TAU;
        let z = (2.0 * v - 1.0).clamp(-1.0, 1.0) * self.half_height;
        let radius = self.radius_at(z);
        Vector3::new(radius * phi.cos(), radius * phi.sin(), z)
    }
}

/// All component shapes for one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyGeometry {
    pub halo: SphereShell,
    pub disk: DiskCylinder,
    pub wind: HyperboloidSheet,
    pub accretion: HyperboloidSheet,
    /// Containment radius of the accretion point cloud, `η_A · R_halo`
    accretion_bound: Kpc,
    r_halo: Kpc,
}

impl GalaxyGeometry {
    /// Build the shape descriptors for one snapshot.
    ///
    /// Errors
    /// ------
    /// * [`SightlineError::DegenerateOpeningAngle`] /
    ///   [`SightlineError::DegenerateFlareAngle`] at 0° or 90°, where the
    ///   tangent (resp. cotangent) slope is singular.
    pub fn build(
        params: &GalaxyParameters,
        scales: &HaloScales,
    ) -> Result<Self, SightlineError> {
        if params.opening_angle <= 0.0 || params.opening_angle >= 90.0 {
            return Err(SightlineError::DegenerateOpeningAngle(params.opening_angle));
        }
        if params.flare_angle <= 0.0 || params.flare_angle >= 90.0 {
            return Err(SightlineError::DegenerateFlareAngle(params.flare_angle));
        }

        Ok(Self {
            halo: SphereShell {
                radius: scales.r_halo,
            },
            disk: DiskCylinder {
                radius: params.disk_radius,
                height: params.disk_height,
            },
            wind: HyperboloidSheet {
                waist: params.skirt_radius,
                slope: params.opening_angle_rad().tan(),
                half_height: params.eta_wind * scales.r_vir,
            },
            accretion: HyperboloidSheet {
                waist: params.accretion_radius,
                slope: params.flare_angle_rad().tan().recip(),
                half_height: scales.r_vir,
            },
            accretion_bound: params.eta_accretion * scales.r_halo,
            r_halo: scales.r_halo,
        })
    }

    /// Gas particles filling the wind skirt: uniform azimuth and height,
    /// uniform radial fill inside the hyperboloid radius.
    pub fn wind_particles<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vector3<f64>> {
        (0..count)
            .map(|_| {
                let phi = rng.gen_range(0.0..TAU);
                let z = rng.gen_range(-1.0..1.0) * self.wind.half_height;
                let radius = self.wind.radius_at(z);
                let fill: f64 = rng.gen();
                Vector3::new(fill * radius * phi.cos(), fill * radius * phi.sin(), z)
            })
            .collect()
    }

    /// Stars filling the disk cylinder, with radial density skewed toward
    /// the center and the height spread shrinking with radius.
    pub fn disk_stars<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Vector3<f64>> {
        (0..count)
            .map(|_| {
                let theta = rng.gen_range(0.0..TAU);
                let u: f64 = rng.gen();
                let r = self.disk.radius * u * u;
                let z = (rng.gen::<f64>() * self.disk.height - self.disk.height / 2.0)
                    * (r / self.disk.radius);
                Vector3::new(r * theta.cos(), r * theta.sin(), z)
            })
            .collect()
    }

    /// Gas particles filling the flared accretion disk.
    ///
    /// Candidates are scattered over the hyperboloid with a random radial
    /// multiplier and kept only inside the sphere of radius
    /// `η_A · R_halo`, so the returned count is at most `count`.
    pub fn accretion_particles<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<Vector3<f64>> {
        let spread = self.r_halo.max(1.0);
        let bound_sq = self.accretion_bound * self.accretion_bound;
        (0..count)
            .filter_map(|_| {
                let phi = rng.gen_range(0.0..TAU);
                let z = rng.gen_range(-1.0..1.0) * self.accretion.half_height;
                let radius = self.accretion.radius_at(z);
                let x = rng.gen_range(1.0..=spread) * radius * phi.cos();
                let y = rng.gen_range(1.0..=spread) * radius * phi.sin();
                if x * x + y * y + z * z < bound_sq {
                    Some(Vector3::new(x, y, z))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod geometry_test {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn built(params: &GalaxyParameters) -> GalaxyGeometry {
        let scales = HaloScales::from_parameters(params).unwrap();
        GalaxyGeometry::build(params, &scales).unwrap()
    }

    #[test]
    fn test_hyperboloid_waist_and_asymptote() {
        assert_relative_eq!(hyperboloid_radius(0.0, 5.0, 1.0), 5.0);
        // far from the waist the sheet approaches the cone radius |z|·slope
        let far = hyperboloid_radius(1000.0, 5.0, 0.5);
        assert_relative_eq!(far, 500.0, max_relative = 1e-4);
    }

    #[test]
    fn test_shapes_follow_the_snapshot() {
        let params = GalaxyParameters::default();
        let scales = HaloScales::from_parameters(&params).unwrap();
        let geometry = built(&params);

        assert_eq!(geometry.halo.radius, scales.r_halo);
        assert_eq!(geometry.disk.radius, params.disk_radius);
        assert_eq!(geometry.wind.waist, params.skirt_radius);
        assert_eq!(geometry.wind.half_height, params.eta_wind * scales.r_vir);
        assert_eq!(geometry.accretion.half_height, scales.r_vir);
        // 45° flare: cotangent slope is 1
        assert_relative_eq!(geometry.accretion.slope, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_build_rejects_degenerate_angles() {
        let params = GalaxyParameters::default();
        let scales = HaloScales::from_parameters(&params).unwrap();

        let bad = GalaxyParameters {
            opening_angle: 0.0,
            ..params
        };
        assert_eq!(
            GalaxyGeometry::build(&bad, &scales),
            Err(SightlineError::DegenerateOpeningAngle(0.0))
        );

        let bad = GalaxyParameters {
            flare_angle: 90.0,
            ..params
        };
        assert_eq!(
            GalaxyGeometry::build(&bad, &scales),
            Err(SightlineError::DegenerateFlareAngle(90.0))
        );
    }

    #[test]
    fn test_surface_map_lies_on_the_sheet() {
        let sheet = HyperboloidSheet {
            waist: 5.0,
            slope: 1.0,
            half_height: 100.0,
        };
        for (u, v) in [(0.0, 0.5), (0.25, 0.0), (0.7, 1.0), (0.99, 0.31)] {
            let p = sheet.point_at(u, v);
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            assert_relative_eq!(rho, sheet.radius_at(p.z), max_relative = 1e-12);
            assert!(p.z.abs() <= sheet.half_height + 1e-12);
        }
    }

    #[test]
    fn test_wind_particles_stay_inside_the_skirt() {
        let geometry = built(&GalaxyParameters::default());
        let mut rng = StdRng::seed_from_u64(7);
        let particles = geometry.wind_particles(2000, &mut rng);

        assert_eq!(particles.len(), 2000);
        for p in &particles {
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            assert!(rho <= geometry.wind.radius_at(p.z) + 1e-9);
            assert!(p.z.abs() <= geometry.wind.half_height + 1e-9);
        }
    }

    #[test]
    fn test_disk_stars_stay_inside_the_cylinder() {
        let geometry = built(&GalaxyParameters::default());
        let mut rng = StdRng::seed_from_u64(11);
        let stars = geometry.disk_stars(2000, &mut rng);

        for p in &stars {
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            assert!(rho <= geometry.disk.radius + 1e-9);
            assert!(p.z.abs() <= geometry.disk.height / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_accretion_particles_respect_the_bound() {
        let params = GalaxyParameters::default();
        let scales = HaloScales::from_parameters(&params).unwrap();
        let geometry = built(&params);
        let mut rng = StdRng::seed_from_u64(13);
        let particles = geometry.accretion_particles(5000, &mut rng);

        assert!(particles.len() <= 5000);
        let bound = params.eta_accretion * scales.r_halo;
        for p in &particles {
            assert!(p.norm() < bound + 1e-9);
        }
    }

    #[test]
    fn test_point_clouds_are_deterministic_under_a_seed() {
        let geometry = built(&GalaxyParameters::default());
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        assert_eq!(
            geometry.wind_particles(100, &mut rng_a),
            geometry.wind_particles(100, &mut rng_b)
        );
    }
}
