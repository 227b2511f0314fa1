//! Type definition of Float, otherwise constants and functions which
//! can be used almost everywhere else in the code.

// std
use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

pub type Float = f32;

pub const MACHINE_EPSILON: Float = std::f32::EPSILON * 0.5;
pub const SHADOW_EPSILON: Float = 0.0001;

/// Use [f32::to_bits] to convert *f32* to *u32*.
pub fn float_to_bits(f: f32) -> u32 {
    f.to_bits()
}

/// Use [f32::from_bits] to convert *u32* to *f32*.
pub fn bits_to_float(ui: u32) -> f32 {
    f32::from_bits(ui)
}

/// Bump a floating-point value up to the next greater representable
/// floating-point value.
pub fn next_float_up(v: f32) -> f32 {
    if v.is_infinite() && v > 0.0 {
        v
    } else {
        let new_v = if v == -0.0 { 0.0 } else { v };
        let mut ui: u32 = float_to_bits(new_v);
        if new_v >= 0.0 {
            ui += 1;
        } else {
            ui -= 1;
        }
        bits_to_float(ui)
    }
}

/// Bump a floating-point value down to the next smaller representable
/// floating-point value.
pub fn next_float_down(v: f32) -> f32 {
    if v.is_infinite() && v < 0.0 {
        v
    } else {
        let new_v = if v == 0.0 { -0.0 } else { v };
        let mut ui: u32 = float_to_bits(new_v);
        if new_v > 0.0 {
            ui -= 1;
        } else {
            ui += 1;
        }
        bits_to_float(ui)
    }
}

/// Conservative bound on the relative error of *n* chained
/// floating-point operations, (1 ± eps)^n - 1.
pub fn gamma(n: i32) -> Float {
    (n as Float * MACHINE_EPSILON) / (1.0 - n as Float * MACHINE_EPSILON)
}

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Interpolate linearly between two provided values.
pub fn lerp<S, T>(t: S, a: T, b: T) -> T
where
    S: num::One,
    S: Sub<S, Output = S>,
    S: Copy,
    T: Add<T, Output = T>,
    T: Mul<S, Output = T>,
{
    let one: S = num::One::one();
    a * (one - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_float_brackets_value() {
        for v in [0.0_f32, 1.0, -1.0, 1e-30, -1e-30, 1e30, -1e30].iter() {
            assert!(next_float_up(*v) > *v);
            assert!(next_float_down(*v) < *v);
        }
        assert_eq!(next_float_up(std::f32::INFINITY), std::f32::INFINITY);
        assert_eq!(
            next_float_down(std::f32::NEG_INFINITY),
            std::f32::NEG_INFINITY
        );
    }

    #[test]
    fn gamma_is_positive_and_grows() {
        assert!(gamma(1) > 0.0);
        assert!(gamma(7) > gamma(3));
    }
}
