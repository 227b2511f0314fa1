//! Randomized and scenario tests for the shape intersection,
//! sampling, and ray spawning routines. The randomized tests draw
//! coordinates log-uniformly over many orders of magnitude so that
//! the conservative error bounds are exercised at both tiny and huge
//! scales.

use pbr_shapes::core::geometry::{
    nrm_dot_vec3, pnt3_distance, pnt3_inside_bnd3, vec3_faceforward_nrm,
};
use pbr_shapes::core::geometry::{Bounds3f, Normal3f, Point2f, Point3f, Ray, Vector3f};
use pbr_shapes::core::interaction::{InteractionCommon, SurfaceInteraction};
use pbr_shapes::core::pbrt::{lerp, Float};
use pbr_shapes::core::rng::Rng;
use pbr_shapes::core::sampling::uniform_sample_sphere;
use pbr_shapes::core::shape::Shape;
use pbr_shapes::core::transform::Transform;
use pbr_shapes::shapes::cone::Cone;
use pbr_shapes::shapes::cylinder::Cylinder;
use pbr_shapes::shapes::paraboloid::Paraboloid;
use pbr_shapes::shapes::sphere::Sphere;
use pbr_shapes::shapes::triangle::create_triangle_mesh;

use std::sync::Arc;

/// A value distributed log-uniformly over [10^-exp, 10^exp].
fn pexp(rng: &mut Rng, exp: Float) -> Float {
    let logu: Float = lerp(rng.uniform_float(), -exp, exp);
    (10.0 as Float).powf(logu)
}

fn random_point(rng: &mut Rng, exp: Float) -> Point3f {
    Point3f {
        x: pexp(rng, exp),
        y: pexp(rng, exp),
        z: pexp(rng, exp),
    }
}

fn random_unit_vector(rng: &mut Rng) -> Vector3f {
    let u: Point2f = Point2f {
        x: rng.uniform_float(),
        y: rng.uniform_float(),
    };
    uniform_sample_sphere(&u)
}

/// Check for incorrect self-intersection: assumes that the shape is
/// convex, such that if the dot product of an outgoing ray and the
/// surface normal at a point is positive, then a ray leaving that
/// point in that direction should never intersect the shape.
fn test_reintersect_convex(shape: &Shape, rng: &mut Rng) {
    // ray origin
    let o: Point3f = random_point(rng, 8.0);

    // destination: a random point in the shape's bounding box
    let bbox: Bounds3f = shape.world_bound();
    let t: Point3f = Point3f {
        x: rng.uniform_float(),
        y: rng.uniform_float(),
        z: rng.uniform_float(),
    };
    let p2: Point3f = bbox.lerp(&t);

    // ray to intersect with the shape
    let mut r: Ray = Ray {
        o,
        d: p2 - o,
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    if rng.uniform_float() < 0.5 {
        r.d = r.d.normalize();
    }

    // we should usually (but not always) find an intersection
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    let mut t_hit: Float = 0.0;
    if !shape.intersect(&r, &mut t_hit, &mut isect) {
        return;
    }

    // now trace a bunch of rays leaving the intersection point
    for _ in 0..500 {
        // random direction leaving the intersection point, in the
        // same hemisphere as the surface normal
        let mut w: Vector3f = random_unit_vector(rng);
        w = vec3_faceforward_nrm(&w, &isect.common.n);
        let r_out: Ray = isect.common.spawn_ray(&w);
        assert!(!shape.intersect_p(&r_out));
        let mut spawn_isect: SurfaceInteraction = SurfaceInteraction::default();
        let mut spawn_t_hit: Float = 0.0;
        assert!(!shape.intersect(&r_out, &mut spawn_t_hit, &mut spawn_isect));

        // choose a random point to trace rays to, in the hemisphere
        // about the intersection point's surface normal
        let p2: Point3f = random_point(rng, 8.0);
        let mut w: Vector3f = p2 - isect.common.p;
        w = vec3_faceforward_nrm(&w, &isect.common.n);
        let p2: Point3f = isect.common.p + w;
        let r_out: Ray = isect.common.spawn_ray_to(&p2);

        assert!(!shape.intersect_p(&r_out));
        assert!(!shape.intersect(&r_out, &mut spawn_t_hit, &mut spawn_isect));
    }
}

#[test]
fn triangle_reintersect() {
    for i in 0..50 {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(i);
        // triangle vertices
        let v: Vec<Point3f> = (0..3).map(|_| random_point(&mut rng, 8.0)).collect();

        // create the corresponding triangle
        let tris: Vec<Arc<Shape>> = create_triangle_mesh(
            Transform::default(),
            false,
            1,
            vec![0, 1, 2],
            3,
            v,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(tris.len(), 1);
        let tri: &Shape = &tris[0];

        // sample a point on the triangle surface to shoot the ray toward
        let u: Point2f = Point2f {
            x: rng.uniform_float(),
            y: rng.uniform_float(),
        };
        let mut pdf: Float = 0.0;
        let p_tri: InteractionCommon = tri.sample(&u, &mut pdf);

        // choose a ray origin
        let o: Point3f = random_point(&mut rng, 8.0);

        // intersect the ray with the triangle
        let r: Ray = Ray {
            o,
            d: p_tri.p - o,
            t_max: std::f32::INFINITY,
            time: 0.0,
        };
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        if !tri.intersect(&r, &mut t_hit, &mut isect) {
            // we should almost always find an intersection, but
            // rarely miss due to round-off error; just do another
            // go-around in this case
            continue;
        }

        // now trace a bunch of rays leaving the intersection point
        for _ in 0..500 {
            // random direction leaving the intersection point, in the
            // same hemisphere as the surface normal
            let mut w: Vector3f = random_unit_vector(&mut rng);
            w = vec3_faceforward_nrm(&w, &isect.common.n);
            let r_out: Ray = isect.common.spawn_ray(&w);
            assert!(!tri.intersect_p(&r_out));
            let mut spawn_isect: SurfaceInteraction = SurfaceInteraction::default();
            let mut spawn_t_hit: Float = 0.0;
            assert!(!tri.intersect(&r_out, &mut spawn_t_hit, &mut spawn_isect));

            // choose a random point to trace rays to, in the
            // hemisphere about the intersection point's surface
            // normal; a target behind the triangle's plane would make
            // the segment legitimately cross the surface
            let p2: Point3f = random_point(&mut rng, 8.0);
            let mut w: Vector3f = p2 - isect.common.p;
            w = vec3_faceforward_nrm(&w, &isect.common.n);
            let p2: Point3f = isect.common.p + w;
            let r_out: Ray = isect.common.spawn_ray_to(&p2);
            assert!(!tri.intersect_p(&r_out));
            assert!(!tri.intersect(&r_out, &mut spawn_t_hit, &mut spawn_isect));
        }
    }
}

#[test]
fn full_sphere_reintersect() {
    for i in 0..50 {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(i);
        let radius: Float = pexp(&mut rng, 4.0);
        let sphere: Shape = Shape::Sphr(Sphere::new(
            Transform::default(),
            false,
            radius,
            -radius,
            radius,
            360.0,
        ));
        test_reintersect_convex(&sphere, &mut rng);
    }
}

#[test]
fn partial_sphere_normal() {
    for i in 0..50 {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(i);
        let radius: Float = pexp(&mut rng, 4.0);
        let z_min: Float = if rng.uniform_float() < 0.5 {
            -radius
        } else {
            lerp(rng.uniform_float(), -radius, radius)
        };
        let z_max: Float = if rng.uniform_float() < 0.5 {
            radius
        } else {
            lerp(rng.uniform_float(), -radius, radius)
        };
        let phi_max: Float = if rng.uniform_float() < 0.5 {
            360.0
        } else {
            rng.uniform_float() * 360.0
        };
        let sphere: Shape = Shape::Sphr(Sphere::new(
            Transform::default(),
            false,
            radius,
            z_min,
            z_max,
            phi_max,
        ));

        // ray origin
        let o: Point3f = random_point(&mut rng, 8.0);

        // destination: a random point in the shape's bounding box
        let bbox: Bounds3f = sphere.world_bound();
        let t: Point3f = Point3f {
            x: rng.uniform_float(),
            y: rng.uniform_float(),
            z: rng.uniform_float(),
        };
        let p2: Point3f = bbox.lerp(&t);

        // ray to intersect with the shape
        let mut r: Ray = Ray {
            o,
            d: p2 - o,
            t_max: std::f32::INFINITY,
            time: 0.0,
        };
        if rng.uniform_float() < 0.5 {
            r.d = r.d.normalize();
        }

        // we should usually (but not always) find an intersection
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        let mut t_hit: Float = 0.0;
        if !sphere.intersect(&r, &mut t_hit, &mut isect) {
            continue;
        }

        // the normal of a sphere around the origin points along the
        // hit point position
        let dot: Float = nrm_dot_vec3(
            &isect.common.n.normalize(),
            &Vector3f::from(isect.common.p).normalize(),
        );
        assert!(
            (dot - 1.0).abs() < 1e-3,
            "normal not parallel to radius vector (dot = {})",
            dot
        );
    }
}

#[test]
fn partial_sphere_reintersect() {
    for i in 0..50 {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(i);
        let radius: Float = pexp(&mut rng, 4.0);
        let z_min: Float = if rng.uniform_float() < 0.5 {
            -radius
        } else {
            lerp(rng.uniform_float(), -radius, radius)
        };
        let z_max: Float = if rng.uniform_float() < 0.5 {
            radius
        } else {
            lerp(rng.uniform_float(), -radius, radius)
        };
        let phi_max: Float = if rng.uniform_float() < 0.5 {
            360.0
        } else {
            rng.uniform_float() * 360.0
        };
        let sphere: Shape = Shape::Sphr(Sphere::new(
            Transform::default(),
            false,
            radius,
            z_min,
            z_max,
            phi_max,
        ));
        test_reintersect_convex(&sphere, &mut rng);
    }
}

#[test]
fn cylinder_reintersect() {
    for i in 0..50 {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(i);
        let radius: Float = pexp(&mut rng, 4.0);
        let z_min: Float = pexp(&mut rng, 4.0)
            * (if rng.uniform_float() < 0.5 {
                -1.0 as Float
            } else {
                1.0 as Float
            });
        let z_max: Float = pexp(&mut rng, 4.0)
            * (if rng.uniform_float() < 0.5 {
                -1.0 as Float
            } else {
                1.0 as Float
            });
        let phi_max: Float = if rng.uniform_float() < 0.5 {
            360.0
        } else {
            rng.uniform_float() * 360.0
        };
        if z_min == z_max {
            continue;
        }
        let cylinder: Shape = Shape::Clndr(Cylinder::new(
            Transform::default(),
            false,
            radius,
            z_min,
            z_max,
            phi_max,
        ));
        test_reintersect_convex(&cylinder, &mut rng);
    }
}

#[test]
fn unit_sphere_axis_hit() {
    let sphere: Shape = Shape::Sphr(Sphere::new(
        Transform::default(),
        false,
        1.0,
        -1.0,
        1.0,
        360.0,
    ));
    let r: Ray = Ray {
        o: Point3f {
            x: 0.0,
            y: 0.0,
            z: 5.0,
        },
        d: Vector3f {
            x: 0.0,
            y: 0.0,
            z: -1.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(sphere.intersect(&r, &mut t_hit, &mut isect));
    assert!((t_hit - 4.0).abs() < 1e-4);
    assert!((isect.common.p.z - 1.0).abs() < 1e-4);
    // outward-facing normal at the north pole
    let n: Normal3f = isect.common.n.normalize();
    assert!(n.z > 0.999);
    assert!(sphere.intersect_p(&r));
}

#[test]
fn sphere_respects_t_max() {
    let sphere: Shape = Shape::Sphr(Sphere::new(
        Transform::default(),
        false,
        1.0,
        -1.0,
        1.0,
        360.0,
    ));
    let r: Ray = Ray {
        o: Point3f {
            x: 0.0,
            y: 0.0,
            z: 5.0,
        },
        d: Vector3f {
            x: 0.0,
            y: 0.0,
            z: -1.0,
        },
        t_max: 3.5,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(!sphere.intersect(&r, &mut t_hit, &mut isect));
    assert!(!sphere.intersect_p(&r));
}

#[test]
fn partial_cylinder_phi_clipping() {
    // half cylinder covering phi in [0, 180] degrees (y >= 0); a ray
    // arriving from -y first meets the surface at phi = 270 degrees,
    // which is clipped, and must hit the back wall at phi = 90 instead
    let cylinder: Shape = Shape::Clndr(Cylinder::new(
        Transform::default(),
        false,
        1.0,
        -1.0,
        1.0,
        180.0,
    ));
    let r: Ray = Ray {
        o: Point3f {
            x: 0.0,
            y: -5.0,
            z: 0.0,
        },
        d: Vector3f {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(cylinder.intersect(&r, &mut t_hit, &mut isect));
    assert!((t_hit - 6.0).abs() < 1e-3);
    assert!((isect.common.p.y - 1.0).abs() < 1e-3);
}

#[test]
fn degenerate_triangle_misses() {
    // all three vertices on one line; the intersection must report a
    // miss rather than produce NaNs
    let tris: Vec<Arc<Shape>> = create_triangle_mesh(
        Transform::default(),
        false,
        1,
        vec![0, 1, 2],
        3,
        vec![
            Point3f {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            Point3f {
                x: 1.0,
                y: 1.0,
                z: 1.0,
            },
            Point3f {
                x: 2.0,
                y: 2.0,
                z: 2.0,
            },
        ],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    let tri: &Shape = &tris[0];
    let r: Ray = Ray {
        o: Point3f {
            x: 0.5,
            y: 0.6,
            z: -3.0,
        },
        d: Vector3f {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(!tri.intersect(&r, &mut t_hit, &mut isect));
    assert!(!tri.intersect_p(&r));
}

#[test]
fn sampled_points_inside_world_bound() {
    let mut rng: Rng = Rng::new();
    let mut shapes: Vec<Arc<Shape>> = vec![
        Arc::new(Shape::Sphr(Sphere::new(
            Transform::translate(&Vector3f {
                x: 1.5,
                y: -0.25,
                z: 8.0,
            }),
            false,
            2.5,
            -2.5,
            2.5,
            360.0,
        ))),
        Arc::new(Shape::Clndr(Cylinder::new(
            Transform::rotate_x(30.0),
            false,
            1.25,
            -2.0,
            1.0,
            360.0,
        ))),
        Arc::new(Shape::Cn(Cone::new(
            Transform::default(),
            false,
            2.0,
            1.0,
            360.0,
        ))),
        Arc::new(Shape::Prbld(Paraboloid::new(
            Transform::default(),
            false,
            1.0,
            0.0,
            2.0,
            360.0,
        ))),
    ];
    shapes.extend(create_triangle_mesh(
        Transform::translate(&Vector3f {
            x: -1.0,
            y: 0.5,
            z: 3.0,
        }),
        false,
        1,
        vec![0, 1, 2],
        3,
        vec![
            Point3f {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            Point3f {
                x: 2.0,
                y: 0.0,
                z: 0.5,
            },
            Point3f {
                x: 0.0,
                y: 3.0,
                z: 1.0,
            },
        ],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    ));
    for shape in &shapes {
        // expand the bounds a touch to absorb round-off
        let bbox: Bounds3f = pbr_shapes::core::geometry::bnd3_expand(
            &shape.world_bound(),
            1e-3 * shape.world_bound().diagonal().length(),
        );
        for _ in 0..2500 {
            let u: Point2f = Point2f {
                x: rng.uniform_float(),
                y: rng.uniform_float(),
            };
            let mut pdf: Float = 0.0;
            let it: InteractionCommon = shape.sample(&u, &mut pdf);
            assert!(pnt3_inside_bnd3(&it.p, &bbox));
            assert!(pdf > 0.0);
            assert!((pdf - 1.0 / shape.area()).abs() <= 1e-3 * pdf);
        }
    }
}

#[test]
fn cone_axis_hit_and_area() {
    // unit cone: radius 1 at z = 0, apex at z = 1
    let cone: Shape = Shape::Cn(Cone::new(Transform::default(), false, 1.0, 1.0, 360.0));
    // at z = 0.5 the cone's radius is 0.5, so a ray arriving along x
    // from -5 first hits the surface at x = -0.5
    let r: Ray = Ray {
        o: Point3f {
            x: -5.0,
            y: 0.0,
            z: 0.5,
        },
        d: Vector3f {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(cone.intersect(&r, &mut t_hit, &mut isect));
    assert!((t_hit - 4.5).abs() < 1e-3);
    assert!((isect.common.p.x - -0.5).abs() < 1e-3);
    assert!(cone.intersect_p(&r));
    // a ray above the apex passes by
    let r_miss: Ray = Ray {
        o: Point3f {
            x: -5.0,
            y: 0.0,
            z: 1.5,
        },
        d: Vector3f {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    assert!(!cone.intersect_p(&r_miss));
    // lateral area of a full cone: pi * r * sqrt(h^2 + r^2)
    let expected: Float = std::f32::consts::PI * (2.0 as Float).sqrt();
    assert!((cone.area() - expected).abs() < 1e-3);
}

#[test]
fn paraboloid_axis_hit_and_area() {
    // z = z_max * (x^2 + y^2) / r^2 with r = 1, z in [0, 1]
    let paraboloid: Shape = Shape::Prbld(Paraboloid::new(
        Transform::default(),
        false,
        1.0,
        0.0,
        1.0,
        360.0,
    ));
    // a ray along x at z = 0.25 hits where x^2 = 0.25
    let r: Ray = Ray {
        o: Point3f {
            x: -5.0,
            y: 0.0,
            z: 0.25,
        },
        d: Vector3f {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        t_max: std::f32::INFINITY,
        time: 0.0,
    };
    let mut t_hit: Float = 0.0;
    let mut isect: SurfaceInteraction = SurfaceInteraction::default();
    assert!(paraboloid.intersect(&r, &mut t_hit, &mut isect));
    assert!((t_hit - 4.5).abs() < 1e-3);
    assert!((isect.common.p.x - -0.5).abs() < 1e-3);
    // closed form for the surface of revolution with k = z_max / r^2:
    // area = phi_max r^4 ((4 k z_max + 1)^1.5 - (4 k z_min + 1)^1.5)
    //        / (12 z_max^2)
    let expected: Float =
        2.0 as Float * std::f32::consts::PI * ((5.0 as Float).powf(1.5) - 1.0) / 12.0 as Float;
    assert!((paraboloid.area() - expected).abs() < 1e-3 * expected);
}

#[test]
fn intersect_and_intersect_p_agree() {
    let mut rng: Rng = Rng::new();
    rng.set_sequence(11);
    let sphere: Shape = Shape::Sphr(Sphere::new(
        Transform::translate(&Vector3f {
            x: 0.3,
            y: -0.8,
            z: 2.0,
        }) * Transform::rotate_y(20.0),
        false,
        1.3,
        -0.9,
        1.1,
        250.0,
    ));
    for _ in 0..2000 {
        let o: Point3f = Point3f {
            x: lerp(rng.uniform_float(), -6.0, 6.0),
            y: lerp(rng.uniform_float(), -6.0, 6.0),
            z: lerp(rng.uniform_float(), -6.0, 6.0),
        };
        let d: Vector3f = random_unit_vector(&mut rng);
        let r: Ray = Ray {
            o,
            d,
            t_max: std::f32::INFINITY,
            time: 0.0,
        };
        let mut t_hit: Float = 0.0;
        let mut isect: SurfaceInteraction = SurfaceInteraction::default();
        assert_eq!(
            sphere.intersect(&r, &mut t_hit, &mut isect),
            sphere.intersect_p(&r)
        );
    }
}

#[test]
fn sphere_sample_from_outside_ref_point() {
    let mut rng: Rng = Rng::new();
    rng.set_sequence(5);
    let center: Point3f = Point3f {
        x: 0.0,
        y: 0.0,
        z: 10.0,
    };
    let sphere: Shape = Shape::Sphr(Sphere::new(
        Transform::translate(&Vector3f {
            x: center.x,
            y: center.y,
            z: center.z,
        }),
        false,
        1.0,
        -1.0,
        1.0,
        360.0,
    ));
    let iref: InteractionCommon = InteractionCommon {
        p: Point3f::default(),
        n: Normal3f {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        },
        ..Default::default()
    };
    for _ in 0..1000 {
        let u: Point2f = Point2f {
            x: rng.uniform_float(),
            y: rng.uniform_float(),
        };
        let mut pdf: Float = 0.0;
        let it: InteractionCommon = sphere.sample_with_ref_point(&iref, &u, &mut pdf);
        assert!(pdf > 0.0);
        // the sampled point lies on the sphere surface
        assert!((pnt3_distance(&it.p, &center) - 1.0).abs() < 1e-3);
        // and the direction towards it hits the sphere
        let wi: Vector3f = (it.p - iref.p).normalize();
        assert!(sphere.pdf_with_ref_point(&iref, &wi) > 0.0);
    }
}
