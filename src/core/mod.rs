//! Shared foundations: numeric helpers, interval arithmetic for
//! running error analysis, geometric types, transformations,
//! interactions, sampling routines, and a small random number
//! generator.

pub mod efloat;
pub mod geometry;
pub mod interaction;
pub mod pbrt;
pub mod rng;
pub mod sampling;
pub mod shape;
pub mod transform;
