//! # pbr_shapes
//!
//! The geometric core of a physically based renderer: shape
//! primitives (quadrics and triangle meshes) answering
//! ray-intersection queries with conservative floating-point error
//! bounds, so that rays spawned from an intersection point never
//! re-intersect the surface they left due to round-off error.
//!
//! The crate exposes a closed set of shapes behind one contract
//! ([`core::shape::Shape`]): bounding boxes, intersection and
//! occlusion tests, surface area, and area-uniform surface sampling.
//! Intersection results carry a per-axis absolute error bound on the
//! hit position ([`core::interaction::SurfaceInteraction`]) which
//! sizes the offset applied when spawning secondary rays.

#[macro_use]
extern crate impl_ops;

pub mod core;
pub mod shapes;
