//! The geometry of a particular point on a surface is represented by
//! a **SurfaceInteraction**. Having this abstraction lets most of the
//! system work with points on surfaces without needing to consider
//! the particular type of geometric shape the points lie on.
//!
//! Rays leaving a surface are spawned through
//! [InteractionCommon::spawn_ray] and
//! [InteractionCommon::spawn_ray_to], which offset the new origin
//! away from the surface by the accumulated floating-point error
//! bound so that the ray does not incorrectly re-intersect the
//! surface it just left.

// pbr_shapes
use crate::core::geometry::{
    nrm_faceforward_nrm, pnt3_offset_ray_origin, vec3_cross_vec3, vec3_dot_nrm,
};
use crate::core::geometry::{Normal3f, Point2f, Point3f, Ray, Vector3f};
use crate::core::pbrt::Float;
use crate::core::pbrt::SHADOW_EPSILON;

#[derive(Debug, Default, Copy, Clone)]
pub struct InteractionCommon {
    // Interaction Public Data
    pub p: Point3f,
    pub time: Float,
    pub p_error: Vector3f,
    pub wo: Vector3f,
    pub n: Normal3f,
}

impl InteractionCommon {
    /// Spawn a new ray leaving the surface in direction *d*. The
    /// direction is not normalized.
    pub fn spawn_ray(&self, d: &Vector3f) -> Ray {
        let o: Point3f = pnt3_offset_ray_origin(&self.p, &self.p_error, &self.n, d);
        Ray {
            o,
            d: *d,
            t_max: std::f32::INFINITY,
            time: self.time,
        }
    }
    /// Spawn a ray from this surface point towards another point;
    /// `t_max` is set just short of 1 so that the ray stops before
    /// the destination surface.
    pub fn spawn_ray_to(&self, p2: &Point3f) -> Ray {
        let origin: Point3f =
            pnt3_offset_ray_origin(&self.p, &self.p_error, &self.n, &(*p2 - self.p));
        let d: Vector3f = *p2 - origin;
        Ray {
            o: origin,
            d,
            t_max: 1.0 - SHADOW_EPSILON,
            time: self.time,
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Shading {
    pub n: Normal3f,
    pub dpdu: Vector3f,
    pub dpdv: Vector3f,
    pub dndu: Normal3f,
    pub dndv: Normal3f,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct SurfaceInteraction {
    // Interaction Public Data
    pub common: InteractionCommon,
    // SurfaceInteraction Public Data
    pub uv: Point2f,
    pub dpdu: Vector3f,
    pub dpdv: Vector3f,
    pub dndu: Normal3f,
    pub dndv: Normal3f,
    pub shading: Shading,
}

impl SurfaceInteraction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: &Point3f,
        p_error: &Vector3f,
        uv: Point2f,
        wo: &Vector3f,
        dpdu: &Vector3f,
        dpdv: &Vector3f,
        dndu: &Normal3f,
        dndv: &Normal3f,
        time: Float,
    ) -> Self {
        let nv: Vector3f = vec3_cross_vec3(dpdu, dpdv).normalize();
        let n: Normal3f = Normal3f {
            x: nv.x,
            y: nv.y,
            z: nv.z,
        };
        SurfaceInteraction {
            common: InteractionCommon {
                p: *p,
                time,
                p_error: *p_error,
                wo: *wo,
                n,
            },
            uv,
            dpdu: *dpdu,
            dpdv: *dpdv,
            dndu: *dndu,
            dndv: *dndv,
            // initialize shading geometry from true geometry
            shading: Shading {
                n,
                dpdu: *dpdu,
                dpdv: *dpdv,
                dndu: *dndu,
                dndv: *dndv,
            },
        }
    }
    /// Update the shading geometry, e.g. after interpolating
    /// per-vertex normals. If *orientation_is_authoritative* the
    /// geometric normal is flipped into the hemisphere of the shading
    /// normal, otherwise the other way round.
    pub fn set_shading_geometry(
        &mut self,
        dpdus: &Vector3f,
        dpdvs: &Vector3f,
        dndus: &Normal3f,
        dndvs: &Normal3f,
        orientation_is_authoritative: bool,
    ) {
        // compute _shading.n_ for _SurfaceInteraction_
        let nv: Vector3f = vec3_cross_vec3(dpdus, dpdvs).normalize();
        self.shading.n = Normal3f {
            x: nv.x,
            y: nv.y,
            z: nv.z,
        };
        if orientation_is_authoritative {
            self.common.n = nrm_faceforward_nrm(&self.common.n, &self.shading.n);
        } else {
            self.shading.n = nrm_faceforward_nrm(&self.shading.n, &self.common.n);
        }
        // initialize shading partial derivative values
        self.shading.dpdu = *dpdus;
        self.shading.dpdv = *dpdvs;
        self.shading.dndu = *dndus;
        self.shading.dndv = *dndvs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_ray_leaves_surface_side() {
        let it: InteractionCommon = InteractionCommon {
            p: Point3f {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            },
            time: 0.0,
            p_error: Vector3f {
                x: 1e-5,
                y: 1e-5,
                z: 1e-5,
            },
            wo: Vector3f {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            },
            n: Normal3f {
                x: 0.0,
                y: 0.0,
                z: 1.0,
            },
        };
        let d: Vector3f = Vector3f {
            x: 0.3,
            y: -0.2,
            z: 0.9,
        };
        let r: Ray = it.spawn_ray(&d);
        // the offset origin must lie on the side of the surface that
        // the ray heads towards
        assert!(vec3_dot_nrm(&(r.o - it.p), &it.n) >= 0.0);
        assert!(r.t_max.is_infinite());
    }

    #[test]
    fn spawn_ray_to_stops_short() {
        let it: InteractionCommon = InteractionCommon {
            p: Point3f {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
            n: Normal3f {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
            ..Default::default()
        };
        let p2: Point3f = Point3f {
            x: 5.0,
            y: 6.0,
            z: 7.0,
        };
        let r: Ray = it.spawn_ray_to(&p2);
        assert!(r.t_max < 1.0);
        let end: Point3f = r.position(1.0);
        assert!((end.x - p2.x).abs() < 1e-4);
        assert!((end.y - p2.y).abs() < 1e-4);
        assert!((end.z - p2.z).abs() < 1e-4);
    }
}
