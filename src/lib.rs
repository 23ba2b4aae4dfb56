//! # Sightline
//!
//! Closed-form kinematic model of a multi-component galaxy (dark-matter
//! halo, rotating stellar disk, biconical wind and flared accretion disk)
//! projected onto an arbitrary line of sight (LOS).
//!
//! The crate derives the halo scale radii from NFW-style inputs, builds the
//! observer-to-galaxy frame transform, samples the sightline through the
//! halo, and evaluates per-component velocity laws projected along the LOS
//! direction cosines. The assembled [`profile::VelocityProfile`] is what a
//! charting collaborator plots; [`geometry::GalaxyGeometry`] feeds a
//! rendering collaborator with the matching parametric shapes and point
//! clouds.
//!
//! Everything is a pure function of one [`galaxy_params::GalaxyParameters`]
//! snapshot: no shared mutable state, no I/O, identical snapshots yield
//! identical output.

pub mod constants;
pub mod galaxy_params;
pub mod geometry;
pub mod halo;
pub mod los;
pub mod profile;
pub mod projection;
pub mod ref_frame;
pub mod scheduler;
pub mod sightline_errors;
pub mod velocity_fields;
