//! In addition to working out error bounds algebraically, we can also
//! have the computer do this work for us as some computation is being
//! performed. This approach is known as *running error analysis*.

// std
use std::ops::{Add, Div, Mul, Neg, Sub};
// pbr_shapes
use crate::core::pbrt::{next_float_down, next_float_up};
use crate::core::pbrt::{Float, MACHINE_EPSILON};

/// **EFloat** keeps track of an interval that describes the
/// uncertainty of a value of interest. The invariant is that the
/// exact, infinite-precision value always lies within
/// `[low, high]`.
#[derive(Debug, Default, Copy, Clone)]
pub struct EFloat {
    pub v: f32,
    pub low: f32,
    pub high: f32,
}

impl EFloat {
    pub fn new(v: f32, err: f32) -> Self {
        if err == 0.0 {
            EFloat { v, low: v, high: v }
        } else {
            EFloat {
                v,
                low: next_float_down(v - err),
                high: next_float_up(v + err),
            }
        }
    }
    pub fn lower_bound(&self) -> f32 {
        self.low
    }
    pub fn upper_bound(&self) -> f32 {
        self.high
    }
    pub fn get_absolute_error(&self) -> f32 {
        next_float_up((self.high - self.v).abs().max((self.v - self.low).abs()))
    }
}

impl PartialEq for EFloat {
    fn eq(&self, rhs: &EFloat) -> bool {
        self.v == rhs.v
    }
}

impl Add for EFloat {
    type Output = EFloat;
    fn add(self, rhs: EFloat) -> EFloat {
        EFloat {
            v: self.v + rhs.v,
            low: next_float_down(self.lower_bound() + rhs.lower_bound()),
            high: next_float_up(self.upper_bound() + rhs.upper_bound()),
        }
    }
}

impl Sub for EFloat {
    type Output = EFloat;
    fn sub(self, rhs: EFloat) -> EFloat {
        EFloat {
            v: self.v - rhs.v,
            low: next_float_down(self.lower_bound() - rhs.upper_bound()),
            high: next_float_up(self.upper_bound() - rhs.lower_bound()),
        }
    }
}

impl Mul for EFloat {
    type Output = EFloat;
    fn mul(self, rhs: EFloat) -> EFloat {
        let prod: [f32; 4] = [
            self.lower_bound() * rhs.lower_bound(),
            self.upper_bound() * rhs.lower_bound(),
            self.lower_bound() * rhs.upper_bound(),
            self.upper_bound() * rhs.upper_bound(),
        ];
        EFloat {
            v: self.v * rhs.v,
            low: next_float_down(prod[0].min(prod[1]).min(prod[2].min(prod[3]))),
            high: next_float_up(prod[0].max(prod[1]).max(prod[2].max(prod[3]))),
        }
    }
}

impl Mul<f32> for EFloat {
    type Output = EFloat;
    fn mul(self, rhs: f32) -> EFloat {
        EFloat::new(rhs, 0.0) * self
    }
}

impl Div for EFloat {
    type Output = EFloat;
    fn div(self, rhs: EFloat) -> EFloat {
        if rhs.low < 0.0 && rhs.high > 0.0 {
            // the interval we're dividing by straddles zero, so just
            // return an interval of everything
            EFloat {
                v: self.v / rhs.v,
                low: -std::f32::INFINITY,
                high: std::f32::INFINITY,
            }
        } else {
            let div: [f32; 4] = [
                self.lower_bound() / rhs.lower_bound(),
                self.upper_bound() / rhs.lower_bound(),
                self.lower_bound() / rhs.upper_bound(),
                self.upper_bound() / rhs.upper_bound(),
            ];
            EFloat {
                v: self.v / rhs.v,
                low: next_float_down(div[0].min(div[1]).min(div[2].min(div[3]))),
                high: next_float_up(div[0].max(div[1]).max(div[2].max(div[3]))),
            }
        }
    }
}

impl Neg for EFloat {
    type Output = EFloat;
    fn neg(self) -> EFloat {
        EFloat {
            v: -self.v,
            low: -self.high,
            high: -self.low,
        }
    }
}

/// Find solution(s) of the quadratic equation at<sup>2</sup> + bt + c = 0
/// using *EFloat* instead of *Float* for error bounds. The roots are
/// returned in increasing order. The discriminant is evaluated in
/// double precision and the cancellation-stable `q` formulation is
/// used instead of the naive quadratic formula.
pub fn quadratic_efloat(a: EFloat, b: EFloat, c: EFloat, t0: &mut EFloat, t1: &mut EFloat) -> bool {
    let discrim: f64 = b.v as f64 * b.v as f64 - 4.0_f64 * a.v as f64 * c.v as f64;
    if discrim < 0.0 {
        false
    } else {
        let root_discrim: f64 = discrim.sqrt();
        let float_root_discrim: EFloat = EFloat::new(
            root_discrim as f32,
            MACHINE_EPSILON as f32 * root_discrim as f32,
        );
        // compute quadratic _t_ values
        let q: EFloat = if b.v < 0.0_f32 {
            (b - float_root_discrim) * -0.5_f32
        } else {
            (b + float_root_discrim) * -0.5_f32
        };
        *t0 = q / a;
        *t1 = c / q;
        if (*t0).v > (*t1).v {
            std::mem::swap(t0, t1);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    #[test]
    fn interval_contains_exact_value() {
        // run random chains of operations in f32 intervals and f64
        // reference arithmetic; the f64 value must stay inside.
        let mut rng: Rng = Rng::new();
        for trial in 0..1000 {
            rng.set_sequence(trial);
            let start: f32 = 10.0_f32.powf(crate::core::pbrt::lerp(
                rng.uniform_float(),
                -4.0_f32,
                4.0_f32,
            ));
            let mut ef: EFloat = EFloat::new(start, 0.0);
            let mut exact: f64 = start as f64;
            for _ in 0..16 {
                let operand: f32 = 10.0_f32.powf(crate::core::pbrt::lerp(
                    rng.uniform_float(),
                    -4.0_f32,
                    4.0_f32,
                ));
                let op: u32 = rng.uniform_uint32_bounded(4);
                match op {
                    0 => {
                        ef = ef + EFloat::new(operand, 0.0);
                        exact += operand as f64;
                    }
                    1 => {
                        ef = ef - EFloat::new(operand, 0.0);
                        exact -= operand as f64;
                    }
                    2 => {
                        ef = ef * EFloat::new(operand, 0.0);
                        exact *= operand as f64;
                    }
                    _ => {
                        ef = ef / EFloat::new(operand, 0.0);
                        exact /= operand as f64;
                    }
                }
            }
            assert!(
                ef.lower_bound() as f64 <= exact && exact <= ef.upper_bound() as f64,
                "exact value {} escaped interval [{}, {}]",
                exact,
                ef.lower_bound(),
                ef.upper_bound()
            );
        }
    }

    #[test]
    fn quadratic_roots_ordered() {
        // (t - 1)(t - 3) = t^2 - 4t + 3
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        assert!(quadratic_efloat(
            EFloat::new(1.0, 0.0),
            EFloat::new(-4.0, 0.0),
            EFloat::new(3.0, 0.0),
            &mut t0,
            &mut t1
        ));
        assert!(t0.v < t1.v);
        assert!((t0.v - 1.0).abs() < 1e-5);
        assert!((t1.v - 3.0).abs() < 1e-5);
    }

    #[test]
    fn quadratic_no_real_roots() {
        let mut t0: EFloat = EFloat::default();
        let mut t1: EFloat = EFloat::default();
        assert!(!quadratic_efloat(
            EFloat::new(1.0, 0.0),
            EFloat::new(0.0, 0.0),
            EFloat::new(1.0, 0.0),
            &mut t0,
            &mut t1
        ));
    }
}
