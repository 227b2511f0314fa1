//! The concrete shape implementations.
//!
//! - Cone
//! - Cylinder
//! - Paraboloid
//! - Sphere
//! - Triangle
//!
//! ## Spheres
//!
//! Spheres are a special case of a general type of surfaces called
//! quadrics. They are the simplest type of curved surfaces that is
//! useful to a ray tracer and are a good starting point for general
//! ray intersection routines.
//!
//! ## Cylinders
//!
//! Another useful quadric is the cylinder. Cylinder shapes are
//! centered around the z axis.
//!
//! ## Cones and Paraboloids
//!
//! Two further quadrics, both centered around the z axis: the cone
//! with its apex at `z = height`, and the paraboloid `z ~ x^2 + y^2`
//! clipped to a z range.
//!
//! ## Triangle Meshes
//!
//! While a natural representation would be to have a **Triangle**
//! shape implementation where each triangle stored the positions of
//! its three vertices, a more memory-efficient representation is to
//! separately store entire triangle meshes with an array of vertex
//! positions where each individual triangle just stores three offsets
//! into this array for its three vertices.

pub mod cone;
pub mod cylinder;
pub mod paraboloid;
pub mod sphere;
pub mod triangle;
