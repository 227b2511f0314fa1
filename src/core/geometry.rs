//! Geometric foundations: points, vectors, normals, rays, and
//! axis-aligned bounding boxes.
//!
//! # Points, Vectors, and Normals
//!
//! A **point** is a zero-dimensional location in 2D or 3D space,
//! represented with x, y (and z) coordinates with respect to a
//! coordinate system. Although the same representation is used for
//! vectors, the fact that a point represents a position whereas a
//! vector represents a direction leads to a number of important
//! differences in how they are treated, particularly under
//! transformation.
//!
//! A surface **normal** is a vector perpendicular to a surface at a
//! particular position. Normals behave differently than vectors in
//! some situations, most notably when applying transformations, so
//! they get their own type.
//!
//! # Rays
//!
//! A **ray** is a semi-infinite line specified by its origin and
//! direction, with a maximum parametric distance `t_max` restricting
//! the valid interval. Intersection queries treat rays as immutable:
//! the hit distance is reported through an out-parameter, never by
//! writing back into the ray.
//!
//! # Bounding Boxes
//!
//! **Bounds3f** represents an axis-aligned region of space by two
//! corner points. Every shape provides a bound in its own frame and
//! in world space; the world-space bound must contain every point the
//! surface can occupy.

// std
use std::ops;
use std::ops::{Index, IndexMut};
// others
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
// pbr_shapes
use crate::core::pbrt::Float;
use crate::core::pbrt::{lerp, next_float_down, next_float_up};

#[derive(EnumIter, Debug, Copy, Clone)]
#[repr(u8)]
pub enum XYEnum {
    X = 0,
    Y = 1,
}

#[derive(EnumIter, Debug, Copy, Clone)]
#[repr(u8)]
pub enum XYZEnum {
    X = 0,
    Y = 1,
    Z = 2,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

impl Vector2f {
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

impl Point2f {
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Index<XYEnum> for Point2f {
    type Output = Float;
    fn index(&self, index: XYEnum) -> &Float {
        match index {
            XYEnum::X => &self.x,
            XYEnum::Y => &self.y,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
    pub fn abs(&self) -> Vector3f {
        Vector3f {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Normal3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Normal3f {
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    pub fn normalize(&self) -> Normal3f {
        let l: Float = self.length();
        Normal3f {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }
}

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Point3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Normal3f> for Vector3f {
    fn from(n: Normal3f) -> Self {
        Vector3f {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

impl From<Vector3f> for Normal3f {
    fn from(v: Vector3f) -> Self {
        Normal3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl_op_ex!(-|a: &Vector2f| -> Vector2f { Vector2f { x: -a.x, y: -a.y } });
impl_op_ex!(-|a: &Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});
impl_op_ex!(-|a: &Normal3f| -> Normal3f {
    Normal3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl_op_ex!(+|a: &Point2f, b: &Point2f| -> Point2f {
    Point2f {
        x: a.x + b.x,
        y: a.y + b.y,
    }
});
impl_op_ex!(-|a: &Point2f, b: &Point2f| -> Vector2f {
    Vector2f {
        x: a.x - b.x,
        y: a.y - b.y,
    }
});
impl_op_ex!(*|a: &Point2f, b: Float| -> Point2f {
    Point2f {
        x: a.x * b,
        y: a.y * b,
    }
});

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});
impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});
impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});
impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});
impl_op!(+= |a: &mut Vector3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});
impl_op!(*= |a: &mut Vector3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_op_ex!(+|a: &Point3f, b: &Point3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});
impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});
impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});
impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});
impl_op_ex!(*|a: &Point3f, b: Float| -> Point3f {
    Point3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});
impl_op_ex!(/|a: &Point3f, b: Float| -> Point3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Point3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});
impl_op!(+= |a: &mut Point3f, b: Vector3f| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});
impl_op!(*= |a: &mut Point3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_op_ex!(+|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});
impl_op_ex!(-|a: &Normal3f, b: &Normal3f| -> Normal3f {
    Normal3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});
impl_op_ex!(*|a: &Normal3f, b: Float| -> Normal3f {
    Normal3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});
impl_op!(*= |a: &mut Normal3f, b: Float| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl Index<XYZEnum> for Vector3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            XYZEnum::Z => &self.z,
        }
    }
}

impl Index<XYZEnum> for Point3f {
    type Output = Float;
    fn index(&self, index: XYZEnum) -> &Float {
        match index {
            XYZEnum::X => &self.x,
            XYZEnum::Y => &self.y,
            XYZEnum::Z => &self.z,
        }
    }
}

impl IndexMut<XYZEnum> for Point3f {
    fn index_mut(&mut self, index: XYZEnum) -> &mut Float {
        match index {
            XYZEnum::X => &mut self.x,
            XYZEnum::Y => &mut self.y,
            XYZEnum::Z => &mut self.z,
        }
    }
}

/// Product of the Euclidean magnitudes of a vector (and another
/// vector) and the cosine of the angle between them. A return value
/// of zero means both are orthogonal, of one means they are codirectional.
pub fn vec3_dot_vec3(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Product of the Euclidean magnitudes of a vector (and a normal) and
/// the cosine of the angle between them.
pub fn vec3_dot_nrm(v1: &Vector3f, n2: &Normal3f) -> Float {
    v1.x * n2.x + v1.y * n2.y + v1.z * n2.z
}

/// Product of the Euclidean magnitudes of a normal (and a vector) and
/// the cosine of the angle between them.
pub fn nrm_dot_vec3(n1: &Normal3f, v2: &Vector3f) -> Float {
    n1.x * v2.x + n1.y * v2.y + n1.z * v2.z
}

/// Product of the Euclidean magnitudes of two normals and the cosine
/// of the angle between them.
pub fn nrm_dot_nrm(n1: &Normal3f, n2: &Normal3f) -> Float {
    n1.x * n2.x + n1.y * n2.y + n1.z * n2.z
}

/// Computes the absolute value of the dot product.
pub fn nrm_abs_dot_vec3(n1: &Normal3f, v2: &Vector3f) -> Float {
    nrm_dot_vec3(n1, v2).abs()
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them.
pub fn vec3_cross_vec3(v1: &Vector3f, v2: &Vector3f) -> Vector3f {
    let v1x: f64 = v1.x as f64;
    let v1y: f64 = v1.y as f64;
    let v1z: f64 = v1.z as f64;
    let v2x: f64 = v2.x as f64;
    let v2y: f64 = v2.y as f64;
    let v2z: f64 = v2.z as f64;
    Vector3f {
        x: ((v1y * v2z) - (v1z * v2y)) as Float,
        y: ((v1z * v2x) - (v1x * v2z)) as Float,
        z: ((v1x * v2y) - (v1y * v2x)) as Float,
    }
}

/// Given a vector and a normal in 3D, the cross product is a vector
/// that is perpendicular to both of them.
pub fn vec3_cross_nrm(v1: &Vector3f, n2: &Normal3f) -> Vector3f {
    let v1x: f64 = v1.x as f64;
    let v1y: f64 = v1.y as f64;
    let v1z: f64 = v1.z as f64;
    let v2x: f64 = n2.x as f64;
    let v2y: f64 = n2.y as f64;
    let v2z: f64 = n2.z as f64;
    Vector3f {
        x: ((v1y * v2z) - (v1z * v2y)) as Float,
        y: ((v1z * v2x) - (v1x * v2z)) as Float,
        z: ((v1x * v2y) - (v1y * v2x)) as Float,
    }
}

/// Return the largest coordinate value.
pub fn vec3_max_component(v: &Vector3f) -> Float {
    v.x.max(v.y.max(v.z))
}

/// Return the index of the component with the largest value.
pub fn vec3_max_dimension(v: &Vector3f) -> usize {
    if v.x > v.y {
        if v.x > v.z {
            0_usize
        } else {
            2_usize
        }
    } else if v.y > v.z {
        1_usize
    } else {
        2_usize
    }
}

/// Permute the coordinate values according to the provided
/// permutation.
pub fn vec3_permute(v: &Vector3f, x: usize, y: usize, z: usize) -> Vector3f {
    let v3: [Float; 3] = [v.x, v.y, v.z];
    Vector3f {
        x: v3[x],
        y: v3[y],
        z: v3[z],
    }
}

/// Permute the coordinate values according to the provided
/// permutation.
pub fn pnt3_permute(p: &Point3f, x: usize, y: usize, z: usize) -> Point3f {
    let p3: [Float; 3] = [p.x, p.y, p.z];
    Point3f {
        x: p3[x],
        y: p3[y],
        z: p3[z],
    }
}

/// Construct a local coordinate system given only a single (normalized)
/// 3D vector.
pub fn vec3_coordinate_system(v1: &Vector3f, v2: &mut Vector3f, v3: &mut Vector3f) {
    if v1.x.abs() > v1.y.abs() {
        *v2 = Vector3f {
            x: -v1.z,
            y: 0.0 as Float,
            z: v1.x,
        } / (v1.x * v1.x + v1.z * v1.z).sqrt();
    } else {
        *v2 = Vector3f {
            x: 0.0 as Float,
            y: v1.z,
            z: -v1.y,
        } / (v1.y * v1.y + v1.z * v1.z).sqrt();
    }
    *v3 = vec3_cross_vec3(v1, &*v2);
}

/// Flip a vector so that it lies in the same hemisphere as a given
/// normal.
pub fn vec3_faceforward_nrm(v: &Vector3f, n: &Normal3f) -> Vector3f {
    if vec3_dot_nrm(v, n) < 0.0 as Float {
        -(*v)
    } else {
        *v
    }
}

/// Flip a normal so that it lies in the same hemisphere as a given
/// normal.
pub fn nrm_faceforward_nrm(n: &Normal3f, n2: &Normal3f) -> Normal3f {
    if nrm_dot_nrm(n, n2) < 0.0 as Float {
        -(*n)
    } else {
        *n
    }
}

/// Return the componentwise absolute value of a normal.
pub fn nrm_abs(n: &Normal3f) -> Normal3f {
    Normal3f {
        x: n.x.abs(),
        y: n.y.abs(),
        z: n.z.abs(),
    }
}

/// The distance between two points.
pub fn pnt3_distance(p1: &Point3f, p2: &Point3f) -> Float {
    (p1 - p2).length()
}

/// The squared distance between two points.
pub fn pnt3_distance_squared(p1: &Point3f, p2: &Point3f) -> Float {
    (p1 - p2).length_squared()
}

/// Return the componentwise absolute value of a point.
pub fn pnt3_abs(p: &Point3f) -> Point3f {
    Point3f {
        x: p.x.abs(),
        y: p.y.abs(),
        z: p.z.abs(),
    }
}

/// When tracing spawned rays leaving the intersection point p, we
/// offset their origins enough to ensure that they are past the
/// boundary of the error box and thus won't incorrectly re-intersect
/// the surface.
pub fn pnt3_offset_ray_origin(
    p: &Point3f,
    p_error: &Vector3f,
    n: &Normal3f,
    w: &Vector3f,
) -> Point3f {
    let d: Float = nrm_dot_vec3(&nrm_abs(n), p_error);
    let mut offset: Vector3f = Vector3f::from(*n) * d;
    if vec3_dot_nrm(w, n) < 0.0 as Float {
        offset = -offset;
    }
    let mut po: Point3f = *p + offset;
    // round offset point _po_ away from _p_
    for i in XYZEnum::iter() {
        if offset[i] > 0.0 as Float {
            po[i] = next_float_up(po[i]);
        } else if offset[i] < 0.0 as Float {
            po[i] = next_float_down(po[i]);
        }
    }
    po
}

/// Take three basis vectors representing the x, y, and z axes and
/// return the appropriate direction vector with respect to the
/// coordinate frame defined by them.
pub fn spherical_direction_vec3(
    sin_theta: Float,
    cos_theta: Float,
    phi: Float,
    x: &Vector3f,
    y: &Vector3f,
    z: &Vector3f,
) -> Vector3f {
    *x * (sin_theta * phi.cos()) + *y * (sin_theta * phi.sin()) + *z * cos_theta
}

#[derive(Debug, Copy, Clone)]
pub struct Bounds3f {
    pub p_min: Point3f,
    pub p_max: Point3f,
}

impl Default for Bounds3f {
    fn default() -> Bounds3f {
        let min_num: Float = std::f32::MIN;
        let max_num: Float = std::f32::MAX;
        // an inverted, empty box which unions correctly
        Bounds3f {
            p_min: Point3f {
                x: max_num,
                y: max_num,
                z: max_num,
            },
            p_max: Point3f {
                x: min_num,
                y: min_num,
                z: min_num,
            },
        }
    }
}

impl Bounds3f {
    pub fn new(p1: Point3f, p2: Point3f) -> Self {
        Bounds3f {
            p_min: Point3f {
                x: p1.x.min(p2.x),
                y: p1.y.min(p2.y),
                z: p1.z.min(p2.z),
            },
            p_max: Point3f {
                x: p1.x.max(p2.x),
                y: p1.y.max(p2.y),
                z: p1.z.max(p2.z),
            },
        }
    }
    pub fn corner(&self, corner: u8) -> Point3f {
        assert!(corner < 8_u8);
        let x: Float = if corner & 1 == 0 {
            self.p_min.x
        } else {
            self.p_max.x
        };
        let y: Float = if corner & 2 == 0 {
            self.p_min.y
        } else {
            self.p_max.y
        };
        let z: Float = if corner & 4 == 0 {
            self.p_min.z
        } else {
            self.p_max.z
        };
        Point3f { x, y, z }
    }
    pub fn diagonal(&self) -> Vector3f {
        self.p_max - self.p_min
    }
    /// Linearly interpolate between the two corners of the box.
    pub fn lerp(&self, t: &Point3f) -> Point3f {
        Point3f {
            x: lerp(t.x, self.p_min.x, self.p_max.x),
            y: lerp(t.y, self.p_min.y, self.p_max.y),
            z: lerp(t.z, self.p_min.z, self.p_max.z),
        }
    }
}

/// Construct a new box that bounds the original box as well as an
/// additional point.
pub fn bnd3_union_pnt3(b: &Bounds3f, p: &Point3f) -> Bounds3f {
    Bounds3f {
        p_min: Point3f {
            x: b.p_min.x.min(p.x),
            y: b.p_min.y.min(p.y),
            z: b.p_min.z.min(p.z),
        },
        p_max: Point3f {
            x: b.p_max.x.max(p.x),
            y: b.p_max.y.max(p.y),
            z: b.p_max.z.max(p.z),
        },
    }
}

/// Determine if a given point is inside the bounding box (boundary
/// included).
pub fn pnt3_inside_bnd3(p: &Point3f, b: &Bounds3f) -> bool {
    p.x >= b.p_min.x
        && p.x <= b.p_max.x
        && p.y >= b.p_min.y
        && p.y <= b.p_max.y
        && p.z >= b.p_min.z
        && p.z <= b.p_max.z
}

/// Pad the bounding box by a constant factor in all dimensions.
pub fn bnd3_expand(b: &Bounds3f, delta: Float) -> Bounds3f {
    Bounds3f {
        p_min: b.p_min
            - Vector3f {
                x: delta,
                y: delta,
                z: delta,
            },
        p_max: b.p_max
            + Vector3f {
                x: delta,
                y: delta,
                z: delta,
            },
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct Ray {
    /// origin
    pub o: Point3f,
    /// direction
    pub d: Vector3f,
    /// limits the ray to a segment along its infinite extent
    pub t_max: Float,
    /// used for animated shapes
    pub time: Float,
}

impl Ray {
    // Point3f operator()(Float t) const { return o + d * t; }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::gamma;

    #[test]
    fn offset_origin_moves_off_surface() {
        let p: Point3f = Point3f {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let p_error: Vector3f = Vector3f {
            x: 1e-4,
            y: 1e-4,
            z: 1e-4,
        };
        let n: Normal3f = Normal3f {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        };
        // outgoing above the surface offsets along +n
        let w_up: Vector3f = Vector3f {
            x: 0.1,
            y: 0.2,
            z: 0.9,
        };
        let po: Point3f = pnt3_offset_ray_origin(&p, &p_error, &n, &w_up);
        assert!(po.z > p.z);
        // outgoing below the surface offsets along -n
        let w_down: Vector3f = Vector3f {
            x: 0.1,
            y: 0.2,
            z: -0.9,
        };
        let po: Point3f = pnt3_offset_ray_origin(&p, &p_error, &n, &w_down);
        assert!(po.z < p.z);
    }

    #[test]
    fn bounds_union_and_containment() {
        let b: Bounds3f = Bounds3f::default();
        let p1: Point3f = Point3f {
            x: -1.0,
            y: 0.0,
            z: 2.0,
        };
        let p2: Point3f = Point3f {
            x: 3.0,
            y: -4.0,
            z: 5.0,
        };
        let b: Bounds3f = bnd3_union_pnt3(&bnd3_union_pnt3(&b, &p1), &p2);
        assert!(pnt3_inside_bnd3(&p1, &b));
        assert!(pnt3_inside_bnd3(&p2, &b));
        let mid: Point3f = b.lerp(&Point3f {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        });
        assert!(pnt3_inside_bnd3(&mid, &b));
        let expanded: Bounds3f = bnd3_expand(&b, gamma(7) * 10.0);
        assert!(pnt3_inside_bnd3(&b.p_min, &expanded));
    }

    #[test]
    fn coordinate_system_is_orthogonal() {
        let v1: Vector3f = Vector3f {
            x: 0.3,
            y: -0.5,
            z: 0.8,
        }
        .normalize();
        let mut v2: Vector3f = Vector3f::default();
        let mut v3: Vector3f = Vector3f::default();
        vec3_coordinate_system(&v1, &mut v2, &mut v3);
        assert!(vec3_dot_vec3(&v1, &v2).abs() < 1e-6);
        assert!(vec3_dot_vec3(&v1, &v3).abs() < 1e-6);
        assert!(vec3_dot_vec3(&v2, &v3).abs() < 1e-6);
    }
}
