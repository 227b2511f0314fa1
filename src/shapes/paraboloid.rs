//! A paraboloid is the surface of revolution `z = z_max (x^2 + y^2) /
//! radius^2` around the *z* axis, clipped to `[z_min, z_max]` and
//! optionally cut by *phi_max*.

// std
use std::f32::consts::PI;
// pbr_shapes
use crate::core::efloat::quadratic_efloat;
use crate::core::efloat::EFloat;
use crate::core::geometry::{vec3_cross_vec3, vec3_dot_vec3};
use crate::core::geometry::{Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f, XYEnum};
use crate::core::interaction::{InteractionCommon, SurfaceInteraction};
use crate::core::pbrt::Float;
use crate::core::pbrt::{clamp_t, gamma, lerp, radians};
use crate::core::transform::Transform;

#[derive(Clone)]
pub struct Paraboloid {
    pub radius: Float,
    pub z_min: Float,
    pub z_max: Float,
    pub phi_max: Float,
    // shared shape data
    object_to_world: Transform,
    world_to_object: Transform,
    reverse_orientation: bool,
    transform_swaps_handedness: bool,
}

impl Default for Paraboloid {
    fn default() -> Self {
        Paraboloid {
            object_to_world: Transform::default(),
            world_to_object: Transform::default(),
            reverse_orientation: false,
            transform_swaps_handedness: false,
            radius: 1.0,
            z_min: 0.0,
            z_max: 1.0,
            phi_max: radians(360.0),
        }
    }
}

impl Paraboloid {
    pub fn new(
        object_to_world: Transform,
        reverse_orientation: bool,
        radius: Float,
        z_min: Float,
        z_max: Float,
        phi_max: Float,
    ) -> Self {
        assert!(
            radius > 0.0,
            "paraboloid radius {:?} must be positive",
            radius
        );
        assert!(
            z_min.min(z_max) >= 0.0,
            "paraboloid z extent [{:?}, {:?}] must be non-negative",
            z_min,
            z_max
        );
        let world_to_object: Transform = Transform::inverse(&object_to_world);
        let transform_swaps_handedness: bool = object_to_world.swaps_handedness();
        Paraboloid {
            object_to_world,
            world_to_object,
            reverse_orientation,
            transform_swaps_handedness,
            radius,
            z_min: z_min.min(z_max),
            z_max: z_min.max(z_max),
            phi_max: radians(clamp_t(phi_max, 0.0, 360.0)),
        }
    }
    pub fn object_bound(&self) -> Bounds3f {
        Bounds3f {
            p_min: Point3f {
                x: -self.radius,
                y: -self.radius,
                z: self.z_min,
            },
            p_max: Point3f {
                x: self.radius,
                y: self.radius,
                z: self.z_max,
            },
        }
    }
    pub fn world_bound(&self) -> Bounds3f {
        self.object_to_world.transform_bounds(&self.object_bound())
    }
    pub fn intersect(&self, r: &Ray, t_hit: &mut Float, isect: &mut SurfaceInteraction) -> bool {
        // transform _Ray_ to object space
        let mut o_err: Vector3f = Vector3f::default();
        let mut d_err: Vector3f = Vector3f::default();
        let ray: Ray = self
            .world_to_object
            .transform_ray_with_error(r, &mut o_err, &mut d_err);

        // compute quadratic paraboloid coefficients

        // initialize _EFloat_ ray coordinate values
        let ox = EFloat::new(ray.o.x, o_err.x);
        let oy = EFloat::new(ray.o.y, o_err.y);
        let oz = EFloat::new(ray.o.z, o_err.z);
        let dx = EFloat::new(ray.d.x, d_err.x);
        let dy = EFloat::new(ray.d.y, d_err.y);
        let dz = EFloat::new(ray.d.z, d_err.z);
        let k: EFloat = EFloat::new(self.z_max, 0.0)
            / (EFloat::new(self.radius, 0.0) * EFloat::new(self.radius, 0.0));
        let a: EFloat = k * (dx * dx + dy * dy);
        let b: EFloat = (k * (dx * ox + dy * oy)) * 2.0f32 - dz;
        let c: EFloat = k * (ox * ox + oy * oy) - oz;

        // solve quadratic equation for _t_ values
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        if !quadratic_efloat(a, b, c, &mut t0, &mut t1) {
            return false;
        }
        // check quadric shape _t0_ and _t1_ for nearest intersection
        if t0.upper_bound() > ray.t_max || t1.lower_bound() <= 0.0f32 {
            return false;
        }
        let mut t_shape_hit: EFloat = t0;
        if t_shape_hit.lower_bound() <= 0.0f32 {
            t_shape_hit = t1;
            if t_shape_hit.upper_bound() > ray.t_max {
                return false;
            }
        }
        // compute paraboloid inverse mapping
        let mut p_hit: Point3f = ray.position(t_shape_hit.v);
        let mut phi: Float = p_hit.y.atan2(p_hit.x);
        if phi < 0.0 as Float {
            phi += 2.0 as Float * PI;
        }
        // test paraboloid intersection against clipping parameters
        if p_hit.z < self.z_min || p_hit.z > self.z_max || phi > self.phi_max {
            if t_shape_hit == t1 {
                return false;
            }
            t_shape_hit = t1;
            if t1.upper_bound() > ray.t_max {
                return false;
            }
            // compute paraboloid inverse mapping
            p_hit = ray.position(t_shape_hit.v);
            phi = p_hit.y.atan2(p_hit.x);
            if phi < 0.0 as Float {
                phi += 2.0 as Float * PI;
            }
            if p_hit.z < self.z_min || p_hit.z > self.z_max || phi > self.phi_max {
                return false;
            }
        }
        // find parametric representation of paraboloid hit
        let u: Float = phi / self.phi_max;
        let v: Float = (p_hit.z - self.z_min) / (self.z_max - self.z_min);
        // compute paraboloid $\dpdu$ and $\dpdv$
        let dpdu: Vector3f = Vector3f {
            x: -self.phi_max * p_hit.y,
            y: self.phi_max * p_hit.x,
            z: 0.0,
        };
        let dpdv: Vector3f = Vector3f {
            x: p_hit.x / (2.0 as Float * p_hit.z),
            y: p_hit.y / (2.0 as Float * p_hit.z),
            z: 1.0,
        } * (self.z_max - self.z_min);
        // compute paraboloid $\dndu$ and $\dndv$
        let d2_p_duu: Vector3f = Vector3f {
            x: p_hit.x,
            y: p_hit.y,
            z: 0.0,
        } * -self.phi_max
            * self.phi_max;
        let d2_p_duv: Vector3f = Vector3f {
            x: -p_hit.y / (2.0 as Float * p_hit.z),
            y: p_hit.x / (2.0 as Float * p_hit.z),
            z: 0.0,
        } * (self.z_max - self.z_min)
            * self.phi_max;
        let d2_p_dvv: Vector3f = Vector3f {
            x: p_hit.x / (4.0 as Float * p_hit.z * p_hit.z),
            y: p_hit.y / (4.0 as Float * p_hit.z * p_hit.z),
            z: 0.0,
        } * -(self.z_max - self.z_min)
            * (self.z_max - self.z_min);
        // compute coefficients for fundamental forms
        let ec: Float = vec3_dot_vec3(&dpdu, &dpdu);
        let fc: Float = vec3_dot_vec3(&dpdu, &dpdv);
        let gc: Float = vec3_dot_vec3(&dpdv, &dpdv);
        let nc: Vector3f = vec3_cross_vec3(&dpdu, &dpdv).normalize();
        let el: Float = vec3_dot_vec3(&nc, &d2_p_duu);
        let fl: Float = vec3_dot_vec3(&nc, &d2_p_duv);
        let gl: Float = vec3_dot_vec3(&nc, &d2_p_dvv);
        // compute $\dndu$ and $\dndv$ from fundamental form coefficients
        let inv_egf2: Float = 1.0 / (ec * gc - fc * fc);
        let dndu = dpdu * (fl * fc - el * gc) * inv_egf2 + dpdv * (el * fc - fl * ec) * inv_egf2;
        let dndu = Normal3f {
            x: dndu.x,
            y: dndu.y,
            z: dndu.z,
        };
        let dndv = dpdu * (gl * fc - fl * gc) * inv_egf2 + dpdv * (fl * fc - gl * ec) * inv_egf2;
        let dndv = Normal3f {
            x: dndv.x,
            y: dndv.y,
            z: dndv.z,
        };
        // compute error bounds for paraboloid intersection
        let px: EFloat = ox + t_shape_hit * dx;
        let py: EFloat = oy + t_shape_hit * dy;
        let pz: EFloat = oz + t_shape_hit * dz;
        let p_error: Vector3f = Vector3f {
            x: px.get_absolute_error(),
            y: py.get_absolute_error(),
            z: pz.get_absolute_error(),
        };
        // initialize _SurfaceInteraction_ from parametric information
        let uv_hit: Point2f = Point2f { x: u, y: v };
        let wo: Vector3f = -ray.d;
        *isect = SurfaceInteraction::new(
            &p_hit, &p_error, uv_hit, &wo, &dpdu, &dpdv, &dndu, &dndv, ray.time,
        );
        self.object_to_world.transform_surface_interaction(isect);
        if self.reverse_orientation ^ self.transform_swaps_handedness {
            isect.common.n *= -1.0 as Float;
            isect.shading.n *= -1.0 as Float;
        }
        *t_hit = t_shape_hit.v;
        true
    }
    pub fn intersect_p(&self, r: &Ray) -> bool {
        // transform _Ray_ to object space
        let mut o_err: Vector3f = Vector3f::default();
        let mut d_err: Vector3f = Vector3f::default();
        let ray: Ray = self
            .world_to_object
            .transform_ray_with_error(r, &mut o_err, &mut d_err);

        // compute quadratic paraboloid coefficients

        // initialize _EFloat_ ray coordinate values
        let ox = EFloat::new(ray.o.x, o_err.x);
        let oy = EFloat::new(ray.o.y, o_err.y);
        let oz = EFloat::new(ray.o.z, o_err.z);
        let dx = EFloat::new(ray.d.x, d_err.x);
        let dy = EFloat::new(ray.d.y, d_err.y);
        let dz = EFloat::new(ray.d.z, d_err.z);
        let k: EFloat = EFloat::new(self.z_max, 0.0)
            / (EFloat::new(self.radius, 0.0) * EFloat::new(self.radius, 0.0));
        let a: EFloat = k * (dx * dx + dy * dy);
        let b: EFloat = (k * (dx * ox + dy * oy)) * 2.0f32 - dz;
        let c: EFloat = k * (ox * ox + oy * oy) - oz;

        // solve quadratic equation for _t_ values
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        if !quadratic_efloat(a, b, c, &mut t0, &mut t1) {
            return false;
        }
        // check quadric shape _t0_ and _t1_ for nearest intersection
        if t0.upper_bound() > ray.t_max || t1.lower_bound() <= 0.0f32 {
            return false;
        }
        let mut t_shape_hit: EFloat = t0;
        if t_shape_hit.lower_bound() <= 0.0f32 {
            t_shape_hit = t1;
            if t_shape_hit.upper_bound() > ray.t_max {
                return false;
            }
        }
        // compute paraboloid inverse mapping
        let mut p_hit: Point3f = ray.position(t_shape_hit.v);
        let mut phi: Float = p_hit.y.atan2(p_hit.x);
        if phi < 0.0 as Float {
            phi += 2.0 as Float * PI;
        }
        // test paraboloid intersection against clipping parameters
        if p_hit.z < self.z_min || p_hit.z > self.z_max || phi > self.phi_max {
            if t_shape_hit == t1 {
                return false;
            }
            t_shape_hit = t1;
            if t1.upper_bound() > ray.t_max {
                return false;
            }
            // compute paraboloid inverse mapping
            p_hit = ray.position(t_shape_hit.v);
            phi = p_hit.y.atan2(p_hit.x);
            if phi < 0.0 as Float {
                phi += 2.0 as Float * PI;
            }
            if p_hit.z < self.z_min || p_hit.z > self.z_max || phi > self.phi_max {
                return false;
            }
        }
        true
    }
    pub fn get_reverse_orientation(&self) -> bool {
        self.reverse_orientation
    }
    pub fn get_transform_swaps_handedness(&self) -> bool {
        self.transform_swaps_handedness
    }
    pub fn area(&self) -> Float {
        let radius2: Float = self.radius * self.radius;
        let k: Float = 4.0 as Float * self.z_max / radius2;
        (radius2 * radius2 * self.phi_max / (12.0 as Float * self.z_max * self.z_max))
            * ((k * self.z_max + 1.0 as Float).powf(1.5)
                - (k * self.z_min + 1.0 as Float).powf(1.5))
    }
    pub fn sample(&self, u: &Point2f, pdf: &mut Float) -> InteractionCommon {
        // the area element per unit z is proportional to
        // sqrt(4 k z + 1), which integrates to (4 k z + 1)^(3/2); z is
        // found by inverting that CDF
        let k: Float = self.z_max / (self.radius * self.radius);
        let c_min: Float = (4.0 as Float * k * self.z_min + 1.0 as Float).powf(1.5);
        let c_max: Float = (4.0 as Float * k * self.z_max + 1.0 as Float).powf(1.5);
        let c: Float = lerp(u[XYEnum::X], c_min, c_max);
        let z: Float = (c.powf(2.0 as Float / 3.0 as Float) - 1.0 as Float) / (4.0 as Float * k);
        let z: Float = clamp_t(z, self.z_min, self.z_max);
        let phi: Float = u[XYEnum::Y] * self.phi_max;
        let rho: Float = (z / k).sqrt();
        let p_obj: Point3f = Point3f {
            x: rho * phi.cos(),
            y: rho * phi.sin(),
            z,
        };
        // object space normal from the surface partial derivatives;
        // at the apex the derivatives degenerate and the normal is
        // straight down
        let n_obj: Vector3f = if p_obj.z > 0.0 as Float {
            let dpdu: Vector3f = Vector3f {
                x: -self.phi_max * p_obj.y,
                y: self.phi_max * p_obj.x,
                z: 0.0,
            };
            let dpdv: Vector3f = Vector3f {
                x: p_obj.x / (2.0 as Float * p_obj.z),
                y: p_obj.y / (2.0 as Float * p_obj.z),
                z: 1.0,
            } * (self.z_max - self.z_min);
            vec3_cross_vec3(&dpdu, &dpdv).normalize()
        } else {
            Vector3f {
                x: 0.0,
                y: 0.0,
                z: -1.0,
            }
        };
        let mut it: InteractionCommon = InteractionCommon::default();
        it.n = self
            .object_to_world
            .transform_normal(&Normal3f {
                x: n_obj.x,
                y: n_obj.y,
                z: n_obj.z,
            })
            .normalize();
        if self.reverse_orientation {
            it.n *= -1.0 as Float;
        }
        let p_obj_error: Vector3f = Vector3f::from(p_obj).abs() * gamma(5_i32);
        it.p = self.object_to_world.transform_point_with_abs_error(
            &p_obj,
            &p_obj_error,
            &mut it.p_error,
        );
        *pdf = 1.0 as Float / self.area();
        it
    }
}
