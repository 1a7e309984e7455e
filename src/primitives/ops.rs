//! Arithmetic operators for [`Vec3`].
//!
//! Scalar operands apply uniformly to all three components; vector-like
//! operands (vectors, pairs, triples, arrays) apply component-wise. Both
//! operand orders are supported, with direction-correct subtraction and
//! division. Division by zero is not guarded and propagates IEEE-754
//! infinities and NaNs.

use super::Vec3;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// The `v + s` operator: adds the scalar to every component.
impl Add<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }
}

/// The `s + v` operator, symmetric with `v + s`.
impl Add<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn add(self, v: Vec3) -> Vec3 {
        v + self
    }
}

/// The `v - s` operator: subtracts the scalar from every component.
impl Sub<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, scalar: f64) -> Self {
        Self::new(self.x - scalar, self.y - scalar, self.z - scalar)
    }
}

/// The `s - v` operator: subtracts every component from the scalar.
impl Sub<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn sub(self, v: Vec3) -> Vec3 {
        Vec3::new(self - v.x, self - v.y, self - v.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// The `s / v` operator: divides the scalar by every component.
impl Div<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn div(self, v: Vec3) -> Vec3 {
        Vec3::new(self / v.x, self / v.y, self / v.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reversed()
    }
}

/// Forwards `+` and `-` for fixed-size vector-like operands on either
/// side through their [`Vec3`] conversion.
macro_rules! impl_vector_like_ops {
    ($($rhs:ty),* $(,)?) => {
        $(
            impl Add<$rhs> for Vec3 {
                type Output = Vec3;

                #[inline]
                fn add(self, other: $rhs) -> Vec3 {
                    self + Vec3::from(other)
                }
            }

            impl Add<Vec3> for $rhs {
                type Output = Vec3;

                #[inline]
                fn add(self, other: Vec3) -> Vec3 {
                    Vec3::from(self) + other
                }
            }

            impl Sub<$rhs> for Vec3 {
                type Output = Vec3;

                #[inline]
                fn sub(self, other: $rhs) -> Vec3 {
                    self - Vec3::from(other)
                }
            }

            impl Sub<Vec3> for $rhs {
                type Output = Vec3;

                #[inline]
                fn sub(self, other: Vec3) -> Vec3 {
                    Vec3::from(self) - other
                }
            }
        )*
    };
}

impl_vector_like_ops!((f64, f64), (f64, f64, f64), [f64; 2], [f64; 3]);

#[cfg(test)]
mod tests {
    use super::super::Vec3;

    #[test]
    fn test_add_vector() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_add_scalar() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a + 10.0, Vec3::new(11.0, 12.0, 13.0));
        assert_eq!(10.0 + a, a + 10.0);
    }

    #[test]
    fn test_sub_vector() {
        let a = Vec3::new(5.0, 7.0, 9.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a - b, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sub_scalar_is_direction_correct() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(10.0 - a, Vec3::new(9.0, 8.0, 7.0));
    }

    #[test]
    fn test_mul_scalar() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn test_div_scalar() {
        let a = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(a / 2.0, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_scalar_div_by_vector() {
        let a = Vec3::new(1.0, 2.0, 4.0);
        assert_eq!(12.0 / a, Vec3::new(12.0, 6.0, 3.0));
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let v = Vec3::new(1.0, -1.0, 1.0) / 0.0;
        assert!(v.x().is_infinite());
        assert!(v.y().is_infinite());
        // Not an error at this layer, just IEEE-754 semantics.
        assert!((1.0 / Vec3::new(0.0, 1.0, 1.0)).x().is_infinite());
    }

    #[test]
    fn test_neg() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(-a, a.reversed());
    }

    #[test]
    fn test_vector_like_operands() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a + (4.0, 5.0), Vec3::new(5.0, 7.0, 3.0));
        assert_eq!(a + (4.0, 5.0, 6.0), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a + [4.0, 5.0], Vec3::new(5.0, 7.0, 3.0));
        assert_eq!(a - [4.0, 5.0, 6.0], Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!((4.0, 5.0, 6.0) + a, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!([4.0, 5.0, 6.0] - a, Vec3::new(3.0, 3.0, 3.0));
    }
}
