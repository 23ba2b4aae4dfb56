//! # Constants and type definitions for Sightline
//!
//! This module centralizes the **physical constants**, **fixed model
//! constants**, and **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Cosmological constants entering the virial-radius derivation (SI)
//! - Fixed parameters of the velocity laws (scale height, stalling envelope,
//!   wind speed exponent)
//! - Sampling contract values (sightline sample count, point-cloud sizes)
//! - Unit type aliases used across the crate
//!
//! Lengths are expressed in kiloparsecs everywhere except inside the
//! virial-radius formula, which is evaluated in SI and converted back with
//! [`M_PER_KPC`]. Velocities entering the model in km/s are converted once
//! to m/s with [`KM_TO_M`] and stay in m/s afterwards.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Critical density of the universe in kg/m³
pub const RHO_CRIT: f64 = 1e-26;

/// Gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const G_SI: f64 = 6.67e-11;

/// NFW constant relating the scale radius to the radius of maximum circular velocity
pub const XI: f64 = 2.16258;

/// NFW mass normalization evaluated at [`XI`]
pub const A_XI: f64 = 1.83519;

/// Meters per kiloparsec
pub const M_PER_KPC: f64 = 3.0857e19;

/// Kilometers per second → meters per second
pub const KM_TO_M: f64 = 1e3;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Fixed model constants
// -------------------------------------------------------------------------------------------------

/// Exponential scale height of the disk rotation law in kpc
pub const DISK_SCALE_HEIGHT: Kpc = 7.0;

/// Stall radius of the halo outflow as a fraction of the halo radius
pub const ETA_STALL: f64 = 0.9;

/// Width of the logistic stalling envelope in kpc
pub const DELTA_STALL: f64 = 0.01;

/// Empirical exponent of the wind speed scaling, vWind = v_c^0.8
pub const WIND_SPEED_EXPONENT: f64 = 0.8;

/// Below this length (kpc) a cylindrical or spherical radius is treated as
/// degenerate (sightline through the rotation axis or the origin)
pub const GEOM_EPS: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Sampling contract values
// -------------------------------------------------------------------------------------------------

/// Number of sightline samples over [-R_halo, +R_halo]
pub const N_LOS_SAMPLES: usize = 1000;

/// Default particle count of the wind point cloud
pub const WIND_PARTICLE_COUNT: usize = 100_000;

/// Default particle count of the accretion-disk point cloud
pub const ACCRETION_PARTICLE_COUNT: usize = 1_000_000;

/// Default star count of the stellar-disk point cloud
pub const DISK_STAR_COUNT: usize = 3_000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kiloparsecs
pub type Kpc = f64;
/// Velocity in kilometers per second
pub type KmPerSec = f64;
/// Velocity in meters per second
pub type MeterPerSec = f64;
