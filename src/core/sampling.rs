//! Draw random samples from distributions used by the shape sampling
//! routines.

// std
use std::f32::consts::PI;
// pbr_shapes
use crate::core::geometry::{Point2f, Vector3f, XYEnum};
use crate::core::pbrt::Float;

/// Uniformly sample rays in a full sphere. Choose a direction.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z: Float = 1.0 as Float - 2.0 as Float * u[XYEnum::X];
    let r: Float = (0.0 as Float).max(1.0 as Float - z * z).sqrt();
    let phi: Float = 2.0 as Float * PI * u[XYEnum::Y];
    Vector3f {
        x: r * phi.cos(),
        y: r * phi.sin(),
        z,
    }
}

/// Uniformly sampling a cone of directions about the (0, 0, 1) axis.
pub fn uniform_cone_pdf(cos_theta_max: Float) -> Float {
    1.0 as Float / (2.0 as Float * PI * (1.0 as Float - cos_theta_max))
}

/// Uniformly distributing samples over isosceles right triangles
/// actually works for any triangle.
pub fn uniform_sample_triangle(u: &Point2f) -> Point2f {
    let su0: Float = u[XYEnum::X].sqrt();
    Point2f {
        x: 1.0 as Float - su0,
        y: u[XYEnum::Y] * su0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    #[test]
    fn sphere_samples_are_unit_length() {
        let mut rng: Rng = Rng::new();
        for _ in 0..1000 {
            let u: Point2f = Point2f {
                x: rng.uniform_float(),
                y: rng.uniform_float(),
            };
            let w: Vector3f = uniform_sample_sphere(&u);
            assert!((w.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn triangle_samples_stay_inside() {
        let mut rng: Rng = Rng::new();
        rng.set_sequence(3);
        for _ in 0..1000 {
            let u: Point2f = Point2f {
                x: rng.uniform_float(),
                y: rng.uniform_float(),
            };
            let b: Point2f = uniform_sample_triangle(&u);
            assert!(b.x >= 0.0 && b.y >= 0.0);
            assert!(b.x + b.y <= 1.0 + 1e-6);
        }
    }
}
