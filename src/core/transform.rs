//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. It is an integral part of the **Transform** class,
//! which bundles a matrix with its inverse so that the two stay
//! mutually consistent; inverting a transform is a swap, not a
//! numerical inversion.
//!
//! Shapes consume a transform pair (object-to-world and
//! world-to-object) supplied by the scene builder. Because
//! transforming a point in floating point introduces round-off, the
//! transform also offers variants that report a conservative absolute
//! error for the result; the intersection routines feed those errors
//! into their interval arithmetic.

// std
use std::ops::Mul;
// pbr_shapes
use crate::core::geometry::{bnd3_union_pnt3, vec3_dot_vec3};
use crate::core::geometry::{Bounds3f, Normal3f, Point3f, Ray, Vector3f};
use crate::core::interaction::SurfaceInteraction;
use crate::core::pbrt::{gamma, radians};
use crate::core::pbrt::Float;

#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
    /// Gauss-Jordan elimination with full pivoting.
    pub fn inverse(m: &Matrix4x4) -> Matrix4x4 {
        let mut indxc: [usize; 4] = [0; 4];
        let mut indxr: [usize; 4] = [0; 4];
        let mut ipiv: [usize; 4] = [0; 4];
        let mut minv: [[Float; 4]; 4] = m.m;
        for i in 0..4 {
            let mut irow: usize = 0;
            let mut icol: usize = 0;
            let mut big: Float = 0.0;
            // choose pivot
            for (j, ipiv_j) in ipiv.iter().enumerate() {
                if *ipiv_j != 1 {
                    for (k, ipiv_k) in ipiv.iter().enumerate() {
                        if *ipiv_k == 0 && minv[j][k].abs() >= big {
                            big = minv[j][k].abs();
                            irow = j;
                            icol = k;
                        } else if *ipiv_k > 1 {
                            panic!("singular matrix in Matrix4x4::inverse()");
                        }
                    }
                }
            }
            ipiv[icol] += 1;
            // swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                for k in 0..4 {
                    // C++: std::swap(minv[irow][k], minv[icol][k]);
                    let swap = minv[irow][k];
                    minv[irow][k] = minv[icol][k];
                    minv[icol][k] = swap;
                }
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv[icol][icol] == 0.0 {
                panic!("singular matrix in Matrix4x4::inverse()");
            }
            // set $m[icol][icol]$ to one by scaling row _icol_
            let pivinv: Float = 1.0 / minv[icol][icol];
            minv[icol][icol] = 1.0;
            for j in 0..4 {
                minv[icol][j] *= pivinv;
            }
            // subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save: Float = minv[j][icol];
                    minv[j][icol] = 0.0;
                    for k in 0..4 {
                        minv[j][k] -= minv[icol][k] * save;
                    }
                }
            }
        }
        // swap columns to reflect permutation
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv[k].swap(indxr[j], indxc[j]);
                }
            }
        }
        Matrix4x4 { m: minv }
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, rhs: &Matrix4x4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if self.m[i][j] != rhs.m[i][j] {
                    return false;
                }
            }
        }
        true
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

#[derive(Debug, Copy, Clone)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            m: Matrix4x4::default(),
            m_inv: Matrix4x4::default(),
        }
    }
}

impl Transform {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        let m: Matrix4x4 = Matrix4x4::new(
            t00, t01, t02, t03, t10, t11, t12, t13, t20, t21, t22, t23, t30, t31, t32, t33,
        );
        Transform {
            m,
            m_inv: Matrix4x4::inverse(&m),
        }
    }
    pub fn inverse(t: &Transform) -> Transform {
        Transform {
            m: t.m_inv,
            m_inv: t.m,
        }
    }
    /// Tell whether the transformation changes a left-handed
    /// coordinate system into a right-handed one (or vice versa).
    pub fn swaps_handedness(&self) -> bool {
        let det: Float = self.m.m[0][0]
            * (self.m.m[1][1] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][1])
            - self.m.m[0][1] * (self.m.m[1][0] * self.m.m[2][2] - self.m.m[1][2] * self.m.m[2][0])
            + self.m.m[0][2] * (self.m.m[1][0] * self.m.m[2][1] - self.m.m[1][1] * self.m.m[2][0]);
        det < 0.0 as Float
    }
    pub fn translate(delta: &Vector3f) -> Transform {
        Transform {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, delta.x, 0.0, 1.0, 0.0, delta.y, 0.0, 0.0, 1.0, delta.z, 0.0, 0.0,
                0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -delta.x, 0.0, 1.0, 0.0, -delta.y, 0.0, 0.0, 1.0, -delta.z, 0.0,
                0.0, 0.0, 1.0,
            ),
        }
    }
    pub fn scale(x: Float, y: Float, z: Float) -> Transform {
        Transform {
            m: Matrix4x4::new(
                x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0 / x,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / y,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / z,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ),
        }
    }
    /// Rotation about the x axis, *theta* in degrees.
    pub fn rotate_x(theta: Float) -> Transform {
        let rad: Float = radians(theta);
        let sin_theta: Float = rad.sin();
        let cos_theta: Float = rad.cos();
        let m: Matrix4x4 = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    /// Rotation about the y axis, *theta* in degrees.
    pub fn rotate_y(theta: Float) -> Transform {
        let rad: Float = radians(theta);
        let sin_theta: Float = rad.sin();
        let cos_theta: Float = rad.cos();
        let m: Matrix4x4 = Matrix4x4::new(
            cos_theta, 0.0, sin_theta, 0.0, 0.0, 1.0, 0.0, 0.0, -sin_theta, 0.0, cos_theta, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    /// Rotation about the z axis, *theta* in degrees.
    pub fn rotate_z(theta: Float) -> Transform {
        let rad: Float = radians(theta);
        let sin_theta: Float = rad.sin();
        let cos_theta: Float = rad.cos();
        let m: Matrix4x4 = Matrix4x4::new(
            cos_theta, -sin_theta, 0.0, 0.0, sin_theta, cos_theta, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    /// Rotation about an arbitrary (normalized) axis, *theta* in
    /// degrees.
    pub fn rotate(theta: Float, axis: &Vector3f) -> Transform {
        let a: Vector3f = axis.normalize();
        let rad: Float = radians(theta);
        let sin_theta: Float = rad.sin();
        let cos_theta: Float = rad.cos();
        let mut m: Matrix4x4 = Matrix4x4::default();
        // compute rotation of first basis vector
        m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
        m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
        m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;
        m.m[0][3] = 0.0;
        // second basis vector
        m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
        m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
        m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;
        m.m[1][3] = 0.0;
        // third basis vector
        m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
        m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
        m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;
        m.m[2][3] = 0.0;
        Transform {
            m,
            m_inv: Matrix4x4::transpose(&m),
        }
    }
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Normals transform by the inverse transpose so that they stay
    /// perpendicular to the surface under nonuniform scaling.
    pub fn transform_normal(&self, n: &Normal3f) -> Normal3f {
        let x: Float = n.x;
        let y: Float = n.y;
        let z: Float = n.z;
        Normal3f {
            x: self.m_inv.m[0][0] * x + self.m_inv.m[1][0] * y + self.m_inv.m[2][0] * z,
            y: self.m_inv.m[0][1] * x + self.m_inv.m[1][1] * y + self.m_inv.m[2][1] * z,
            z: self.m_inv.m[0][2] * x + self.m_inv.m[1][2] * y + self.m_inv.m[2][2] * z,
        }
    }
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        let p: Point3f = self.transform_point(&b.corner(0_u8));
        let mut ret: Bounds3f = Bounds3f { p_min: p, p_max: p };
        for corner in 1_u8..8_u8 {
            ret = bnd3_union_pnt3(&ret, &self.transform_point(&b.corner(corner)));
        }
        ret
    }
    /// Transform a point and return a conservative absolute error for
    /// the transformed result.
    pub fn transform_point_with_error(&self, p: &Point3f, p_error: &mut Vector3f) -> Point3f {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        // compute transformed coordinates from point _p_
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        // compute absolute error for transformed point
        let x_abs_sum: Float = (self.m.m[0][0] * x).abs()
            + (self.m.m[0][1] * y).abs()
            + (self.m.m[0][2] * z).abs()
            + self.m.m[0][3].abs();
        let y_abs_sum: Float = (self.m.m[1][0] * x).abs()
            + (self.m.m[1][1] * y).abs()
            + (self.m.m[1][2] * z).abs()
            + self.m.m[1][3].abs();
        let z_abs_sum: Float = (self.m.m[2][0] * x).abs()
            + (self.m.m[2][1] * y).abs()
            + (self.m.m[2][2] * z).abs()
            + self.m.m[2][3].abs();
        *p_error = Vector3f {
            x: x_abs_sum,
            y: y_abs_sum,
            z: z_abs_sum,
        } * gamma(3_i32);
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    /// Transform a point that already carries an error bound,
    /// accumulating the transform's own round-off on top of it.
    pub fn transform_point_with_abs_error(
        &self,
        pt: &Point3f,
        pt_error: &Vector3f,
        abs_error: &mut Vector3f,
    ) -> Point3f {
        let x: Float = pt.x;
        let y: Float = pt.y;
        let z: Float = pt.z;
        // compute transformed coordinates from point _pt_
        let xp: Float =
            self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z + self.m.m[0][3];
        let yp: Float =
            self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z + self.m.m[1][3];
        let zp: Float =
            self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z + self.m.m[2][3];
        let wp: Float =
            self.m.m[3][0] * x + self.m.m[3][1] * y + self.m.m[3][2] * z + self.m.m[3][3];
        abs_error.x = (gamma(3_i32) + 1.0 as Float)
            * (self.m.m[0][0].abs() * pt_error.x
                + self.m.m[0][1].abs() * pt_error.y
                + self.m.m[0][2].abs() * pt_error.z)
            + gamma(3_i32)
                * ((self.m.m[0][0] * x).abs()
                    + (self.m.m[0][1] * y).abs()
                    + (self.m.m[0][2] * z).abs()
                    + self.m.m[0][3].abs());
        abs_error.y = (gamma(3_i32) + 1.0 as Float)
            * (self.m.m[1][0].abs() * pt_error.x
                + self.m.m[1][1].abs() * pt_error.y
                + self.m.m[1][2].abs() * pt_error.z)
            + gamma(3_i32)
                * ((self.m.m[1][0] * x).abs()
                    + (self.m.m[1][1] * y).abs()
                    + (self.m.m[1][2] * z).abs()
                    + self.m.m[1][3].abs());
        abs_error.z = (gamma(3_i32) + 1.0 as Float)
            * (self.m.m[2][0].abs() * pt_error.x
                + self.m.m[2][1].abs() * pt_error.y
                + self.m.m[2][2].abs() * pt_error.z)
            + gamma(3_i32)
                * ((self.m.m[2][0] * x).abs()
                    + (self.m.m[2][1] * y).abs()
                    + (self.m.m[2][2] * z).abs()
                    + self.m.m[2][3].abs());
        assert!(wp != 0.0, "wp = {:?} != 0.0", wp);
        if wp == 1.0 as Float {
            Point3f {
                x: xp,
                y: yp,
                z: zp,
            }
        } else {
            let inv: Float = 1.0 as Float / wp;
            Point3f {
                x: inv * xp,
                y: inv * yp,
                z: inv * zp,
            }
        }
    }
    pub fn transform_vector_with_error(&self, v: &Vector3f, abs_error: &mut Vector3f) -> Vector3f {
        let x: Float = v.x;
        let y: Float = v.y;
        let z: Float = v.z;
        let gamma: Float = gamma(3_i32);
        abs_error.x = gamma
            * ((self.m.m[0][0] * v.x).abs()
                + (self.m.m[0][1] * v.y).abs()
                + (self.m.m[0][2] * v.z).abs());
        abs_error.y = gamma
            * ((self.m.m[1][0] * v.x).abs()
                + (self.m.m[1][1] * v.y).abs()
                + (self.m.m[1][2] * v.z).abs());
        abs_error.z = gamma
            * ((self.m.m[2][0] * v.x).abs()
                + (self.m.m[2][1] * v.y).abs()
                + (self.m.m[2][2] * v.z).abs());
        Vector3f {
            x: self.m.m[0][0] * x + self.m.m[0][1] * y + self.m.m[0][2] * z,
            y: self.m.m[1][0] * x + self.m.m[1][1] * y + self.m.m[1][2] * z,
            z: self.m.m[2][0] * x + self.m.m[2][1] * y + self.m.m[2][2] * z,
        }
    }
    /// Transform a ray, reporting the absolute errors of the
    /// transformed origin and direction. The origin is advanced along
    /// the direction to just past its own error box.
    pub fn transform_ray_with_error(
        &self,
        r: &Ray,
        o_error: &mut Vector3f,
        d_error: &mut Vector3f,
    ) -> Ray {
        let mut o: Point3f = self.transform_point_with_error(&r.o, o_error);
        let d: Vector3f = self.transform_vector_with_error(&r.d, d_error);
        let length_squared: Float = d.length_squared();
        if length_squared > 0.0 {
            let dt: Float = vec3_dot_vec3(&d.abs(), &*o_error) / length_squared;
            o += d * dt;
        }
        Ray {
            o,
            d,
            t_max: r.t_max,
            time: r.time,
        }
    }
    pub fn transform_surface_interaction(&self, si: &mut SurfaceInteraction) {
        let mut ret: SurfaceInteraction = SurfaceInteraction::default();
        // transform _p_ and _p_error_ in _SurfaceInteraction_
        ret.common.p = self.transform_point_with_abs_error(
            &si.common.p,
            &si.common.p_error,
            &mut ret.common.p_error,
        );
        // transform remaining members of _SurfaceInteraction_
        ret.common.n = self.transform_normal(&si.common.n).normalize();
        ret.common.wo = self.transform_vector(&si.common.wo).normalize();
        ret.common.time = si.common.time;
        ret.uv = si.uv;
        ret.dpdu = self.transform_vector(&si.dpdu);
        ret.dpdv = self.transform_vector(&si.dpdv);
        ret.dndu = self.transform_normal(&si.dndu);
        ret.dndv = self.transform_normal(&si.dndv);
        ret.shading.n = self.transform_normal(&si.shading.n).normalize();
        ret.shading.dpdu = self.transform_vector(&si.shading.dpdu);
        ret.shading.dpdv = self.transform_vector(&si.shading.dpdv);
        ret.shading.dndu = self.transform_normal(&si.shading.dndu);
        ret.shading.dndv = self.transform_normal(&si.shading.dndv);
        ret.shading.n = crate::core::geometry::nrm_faceforward_nrm(&ret.shading.n, &ret.common.n);
        *si = ret;
    }
}

impl PartialEq for Transform {
    fn eq(&self, rhs: &Transform) -> bool {
        rhs.m == self.m && rhs.m_inv == self.m_inv
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips_point() {
        let t: Transform = Transform::translate(&Vector3f {
            x: 1.0,
            y: -2.0,
            z: 0.5,
        }) * Transform::rotate_z(30.0)
            * Transform::scale(2.0, 3.0, 4.0);
        let t_inv: Transform = Transform::inverse(&t);
        let p: Point3f = Point3f {
            x: 0.1,
            y: 0.2,
            z: 0.3,
        };
        let q: Point3f = t_inv.transform_point(&t.transform_point(&p));
        assert!((q.x - p.x).abs() < 1e-5);
        assert!((q.y - p.y).abs() < 1e-5);
        assert!((q.z - p.z).abs() < 1e-5);
    }

    #[test]
    fn mirror_swaps_handedness() {
        assert!(Transform::scale(-1.0, 1.0, 1.0).swaps_handedness());
        assert!(!Transform::scale(2.0, 3.0, 4.0).swaps_handedness());
        assert!(!Transform::default().swaps_handedness());
    }

    #[test]
    fn point_error_is_conservative() {
        let t: Transform = Transform::rotate(37.0, &Vector3f {
            x: 1.0,
            y: 1.0,
            z: 0.2,
        }) * Transform::translate(&Vector3f {
            x: 1000.0,
            y: -2000.0,
            z: 3000.0,
        });
        let p: Point3f = Point3f {
            x: 123.456,
            y: -654.321,
            z: 0.001,
        };
        let mut p_error: Vector3f = Vector3f::default();
        let tp: Point3f = t.transform_point_with_error(&p, &mut p_error);
        // compare against a double precision reference
        let mut ref_p: [f64; 3] = [0.0; 3];
        for (i, r) in ref_p.iter_mut().enumerate() {
            *r = t.m.m[i][0] as f64 * p.x as f64
                + t.m.m[i][1] as f64 * p.y as f64
                + t.m.m[i][2] as f64 * p.z as f64
                + t.m.m[i][3] as f64;
        }
        assert!((tp.x as f64 - ref_p[0]).abs() <= p_error.x as f64);
        assert!((tp.y as f64 - ref_p[1]).abs() <= p_error.y as f64);
        assert!((tp.z as f64 - ref_p[2]).abs() <= p_error.z as f64);
    }
}
