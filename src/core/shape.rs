//! Careful abstraction of geometric shapes in a ray tracer is a key
//! component of a clean system design, and shapes are the ideal
//! candidate for an object-oriented approach. All geometric
//! primitives provide a common interface, and the rest of the system
//! can use this interface without needing any details about the
//! underlying shape.
//!
//! The **Shape** enum dispatches that interface over the concrete
//! shape types. Adding a shape means adding a variant and its arms
//! here; in exchange, shape dispatch needs no virtual calls or boxed
//! trait objects.

// pbr_shapes
use crate::core::geometry::{nrm_abs_dot_vec3, pnt3_distance_squared};
use crate::core::geometry::{Bounds3f, Point2f, Ray, Vector3f};
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::pbrt::Float;
use crate::shapes::cone::Cone;
use crate::shapes::cylinder::Cylinder;
use crate::shapes::paraboloid::Paraboloid;
use crate::shapes::sphere::Sphere;
use crate::shapes::triangle::Triangle;

pub enum Shape {
    Sphr(Sphere),
    Clndr(Cylinder),
    Cn(Cone),
    Prbld(Paraboloid),
    Trngl(Triangle),
}

impl Shape {
    /// Bounding box in the shape's object space.
    pub fn object_bound(&self) -> Bounds3f {
        match self {
            Shape::Sphr(shape) => shape.object_bound(),
            Shape::Clndr(shape) => shape.object_bound(),
            Shape::Cn(shape) => shape.object_bound(),
            Shape::Prbld(shape) => shape.object_bound(),
            Shape::Trngl(shape) => shape.object_bound(),
        }
    }
    /// Bounding box in world space.
    pub fn world_bound(&self) -> Bounds3f {
        match self {
            Shape::Sphr(shape) => shape.world_bound(),
            Shape::Clndr(shape) => shape.world_bound(),
            Shape::Cn(shape) => shape.world_bound(),
            Shape::Prbld(shape) => shape.world_bound(),
            Shape::Trngl(shape) => shape.world_bound(),
        }
    }
    /// Returns the first intersection of the ray with the shape in
    /// `(0, t_max]`, if any, filling in the parametric distance and
    /// the local differential geometry.
    pub fn intersect(&self, r: &Ray, t_hit: &mut Float, isect: &mut SurfaceInteraction) -> bool {
        match self {
            Shape::Sphr(shape) => shape.intersect(r, t_hit, isect),
            Shape::Clndr(shape) => shape.intersect(r, t_hit, isect),
            Shape::Cn(shape) => shape.intersect(r, t_hit, isect),
            Shape::Prbld(shape) => shape.intersect(r, t_hit, isect),
            Shape::Trngl(shape) => shape.intersect(r, t_hit, isect),
        }
    }
    /// Predicate version of [Shape::intersect]; does no work that is
    /// only needed for the differential geometry.
    pub fn intersect_p(&self, r: &Ray) -> bool {
        match self {
            Shape::Sphr(shape) => shape.intersect_p(r),
            Shape::Clndr(shape) => shape.intersect_p(r),
            Shape::Cn(shape) => shape.intersect_p(r),
            Shape::Prbld(shape) => shape.intersect_p(r),
            Shape::Trngl(shape) => shape.intersect_p(r),
        }
    }
    pub fn get_reverse_orientation(&self) -> bool {
        match self {
            Shape::Sphr(shape) => shape.get_reverse_orientation(),
            Shape::Clndr(shape) => shape.get_reverse_orientation(),
            Shape::Cn(shape) => shape.get_reverse_orientation(),
            Shape::Prbld(shape) => shape.get_reverse_orientation(),
            Shape::Trngl(shape) => shape.get_reverse_orientation(),
        }
    }
    pub fn get_transform_swaps_handedness(&self) -> bool {
        match self {
            Shape::Sphr(shape) => shape.get_transform_swaps_handedness(),
            Shape::Clndr(shape) => shape.get_transform_swaps_handedness(),
            Shape::Cn(shape) => shape.get_transform_swaps_handedness(),
            Shape::Prbld(shape) => shape.get_transform_swaps_handedness(),
            Shape::Trngl(shape) => shape.get_transform_swaps_handedness(),
        }
    }
    /// Surface area of the shape in world space.
    pub fn area(&self) -> Float {
        match self {
            Shape::Sphr(shape) => shape.area(),
            Shape::Clndr(shape) => shape.area(),
            Shape::Cn(shape) => shape.area(),
            Shape::Prbld(shape) => shape.area(),
            Shape::Trngl(shape) => shape.area(),
        }
    }
    /// Sample a point uniformly by surface area; the returned
    /// interaction carries the point, its error bound, and the
    /// surface normal at the point.
    pub fn sample(&self, u: &Point2f, pdf: &mut Float) -> InteractionCommon {
        match self {
            Shape::Sphr(shape) => shape.sample(u, pdf),
            Shape::Clndr(shape) => shape.sample(u, pdf),
            Shape::Cn(shape) => shape.sample(u, pdf),
            Shape::Prbld(shape) => shape.sample(u, pdf),
            Shape::Trngl(shape) => shape.sample(u, pdf),
        }
    }
    pub fn pdf(&self, _iref: &InteractionCommon) -> Float {
        1.0 as Float / self.area()
    }
    /// Sample the shape as seen from a reference point; the returned
    /// pdf is with respect to solid angle at the reference point.
    /// Spheres use cone sampling of the subtended solid angle, the
    /// other shapes reweight an area sample.
    pub fn sample_with_ref_point(
        &self,
        iref: &InteractionCommon,
        u: &Point2f,
        pdf: &mut Float,
    ) -> InteractionCommon {
        match self {
            Shape::Sphr(shape) => shape.sample_with_ref_point(iref, u, pdf),
            _ => {
                let intr: InteractionCommon = self.sample(u, pdf);
                let mut wi: Vector3f = intr.p - iref.p;
                if wi.length_squared() == 0.0 as Float {
                    *pdf = 0.0 as Float;
                } else {
                    wi = wi.normalize();
                    // convert from area measure to solid angle measure
                    *pdf *= pnt3_distance_squared(&iref.p, &intr.p)
                        / nrm_abs_dot_vec3(&intr.n, &-wi);
                    if (*pdf).is_infinite() {
                        *pdf = 0.0 as Float;
                    }
                }
                intr
            }
        }
    }
    /// Solid-angle pdf of sampling direction *wi* from *iref* towards
    /// the shape.
    pub fn pdf_with_ref_point(&self, iref: &InteractionCommon, wi: &Vector3f) -> Float {
        match self {
            Shape::Sphr(shape) => shape.pdf_with_ref_point(iref, wi),
            _ => {
                // intersect sample ray with area light geometry
                let ray: Ray = iref.spawn_ray(wi);
                let mut t_hit: Float = 0.0;
                let mut isect_light: SurfaceInteraction = SurfaceInteraction::default();
                if self.intersect(&ray, &mut t_hit, &mut isect_light) {
                    // convert light sample weight to solid angle measure
                    let mut pdf: Float = pnt3_distance_squared(&iref.p, &isect_light.common.p)
                        / (nrm_abs_dot_vec3(&isect_light.common.n, &-(*wi)) * self.area());
                    if pdf.is_infinite() {
                        pdf = 0.0 as Float;
                    }
                    pdf
                } else {
                    0.0 as Float
                }
            }
        }
    }
}
