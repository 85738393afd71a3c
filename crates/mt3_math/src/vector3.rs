//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::MathError;

/// 3D vector with x, y, z components
///
/// Used both for points and for free directions; which one is meant depends on
/// the function it is passed to.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0, z: 1.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Multiply every component by a scalar
    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance between two points
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Largest absolute component
    #[inline]
    pub fn max_abs_component(self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// True when no component is NaN or infinite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Normalize to unit length
    ///
    /// Fails with [`MathError::ZeroLength`] for the zero vector and with
    /// [`MathError::NonFinite`] when a component is NaN or infinite.
    pub fn normalize(self) -> Result<Self, MathError> {
        if !self.is_finite() {
            return Err(MathError::NonFinite);
        }
        let largest = self.max_abs_component();
        if largest == 0.0 {
            return Err(MathError::ZeroLength);
        }
        // Scaled components lie in [-1, 1], so the squared length neither
        // overflows nor underflows to zero.
        let scaled = self / largest;
        Ok(scaled / scaled.length())
    }

    /// Cross product (right-handed component formula)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Component of `self` along `onto`
    ///
    /// Fails with [`MathError::ZeroLength`] when `onto` is the zero vector and
    /// with [`MathError::NonFinite`] when the result does not fit in `f32`.
    pub fn project(self, onto: Self) -> Result<Self, MathError> {
        let unit = onto.normalize()?;
        let projected = unit * self.dot(unit);
        if !projected.is_finite() {
            return Err(MathError::NonFinite);
        }
        Ok(projected)
    }

    /// An arbitrary vector orthogonal to `self`
    ///
    /// Stays non-zero for vectors aligned with Z.
    pub fn perpendicular(self) -> Self {
        if self.x != 0.0 || self.y != 0.0 {
            Self::new(-self.y, self.x, 0.0)
        } else {
            Self::new(0.0, -self.z, self.y)
        }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min_components(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max_components(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Clamp each component between corresponding min and max values
    #[inline]
    pub fn clamp_components(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.clamp(min.x, max.x),
            self.y.clamp(min.y, max.y),
            self.z.clamp(min.z, max.z),
        )
    }

    /// Components as an array, indexable by axis
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every component differs by less than `epsilon`
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

// Operator overloads

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

impl std::ops::Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        v.scale(self)
    }
}

impl std::ops::MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_add_subtract() {
        let a = Vector3::new(1.0, 3.0, -5.0);
        let b = Vector3::new(4.0, -1.0, 2.0);
        assert_eq!(a + b, Vector3::new(5.0, 2.0, -3.0));
        assert_eq!(a - b, Vector3::new(-3.0, 4.0, -7.0));
    }

    #[test]
    fn test_scale() {
        let v = Vector3::new(1.0, 3.0, -5.0);
        assert_eq!(v.scale(4.0), Vector3::new(4.0, 12.0, -20.0));
        assert_eq!(4.0 * v, v * 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 3.0, -5.0);
        let b = Vector3::new(4.0, -1.0, 2.0);
        // 4 - 3 - 10
        assert_eq!(a.dot(b), -9.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_length() {
        let v = Vector3::new(1.0, 3.0, -5.0);
        assert!((v.length() - 35.0f32.sqrt()).abs() < EPSILON);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(2.0, -1.0, 2.0);
        let n = v.normalize().unwrap();
        assert!(n.approx_eq(Vector3::new(2.0 / 3.0, -1.0 / 3.0, 2.0 / 3.0), EPSILON));
        assert!((n.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert_eq!(Vector3::ZERO.normalize(), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_normalized_length_is_one() {
        let samples = [
            Vector3::new(1.2, -3.9, 2.5),
            Vector3::new(0.001, 0.0, 0.0),
            Vector3::new(-100.0, 250.0, 3.0),
            Vector3::new(0.0, 0.0, -7.0),
            Vector3::new(1e20, 0.0, 0.0),
            Vector3::new(3e19, 4e19, 0.0),
            Vector3::new(1e-25, 0.0, 0.0),
            Vector3::new(-2e-30, 1e-30, 2e-30),
        ];
        for v in samples {
            let len = v.normalize().unwrap().length();
            assert!((len - 1.0).abs() < EPSILON, "{:?} normalized to length {}", v, len);
        }
    }

    #[test]
    fn test_normalize_keeps_direction_at_extreme_magnitudes() {
        let big = Vector3::new(3e19, 4e19, 0.0).normalize().unwrap();
        assert!(big.approx_eq(Vector3::new(0.6, 0.8, 0.0), EPSILON));

        let tiny = Vector3::new(0.0, -1e-25, 0.0).normalize().unwrap();
        assert!(tiny.approx_eq(-Vector3::Y, EPSILON));
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        assert_eq!(Vector3::new(f32::INFINITY, 0.0, 0.0).normalize(), Err(MathError::NonFinite));
        assert_eq!(Vector3::new(1.0, f32::NAN, 0.0).normalize(), Err(MathError::NonFinite));
    }

    #[test]
    fn test_cross() {
        let v1 = Vector3::new(1.2, -3.9, 2.5);
        let v2 = Vector3::new(2.8, 0.4, -1.3);
        let c = v1.cross(v2);
        assert!(c.approx_eq(Vector3::new(4.07, 8.56, 11.4), EPSILON));
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vector3::new(1.2, -3.9, 2.5);
        let b = Vector3::new(2.8, 0.4, -1.3);
        assert!(a.cross(b).approx_eq(-b.cross(a), EPSILON));
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    }

    #[test]
    fn test_lerp() {
        let a = Vector3::ZERO;
        let b = Vector3::new(10.0, -10.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(5.0, -5.0, 2.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_project() {
        let a = Vector3::new(-2.0, 4.0, 2.0);
        let b = Vector3::new(2.0, 1.0, 2.0);
        // dot = -4 + 4 + 4 = 4, |b|^2 = 9
        let p = a.project(b).unwrap();
        assert!(p.approx_eq(b * (4.0 / 9.0), EPSILON));
    }

    #[test]
    fn test_project_onto_zero_fails() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.project(Vector3::ZERO), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_project_onto_huge_and_tiny_vectors() {
        let a = Vector3::new(5.0, 0.0, 0.0);
        let p = a.project(Vector3::new(3e19, 4e19, 0.0)).unwrap();
        assert!(p.approx_eq(Vector3::new(1.8, 2.4, 0.0), EPSILON));

        let p = a.project(Vector3::new(1e-25, 0.0, 0.0)).unwrap();
        assert!(p.approx_eq(a, EPSILON));
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let p = v.perpendicular();
        assert_eq!(p, Vector3::new(-2.0, 1.0, 0.0));
        assert_eq!(v.dot(p), 0.0);
    }

    #[test]
    fn test_perpendicular_of_z_axis_is_nonzero() {
        let p = Vector3::new(0.0, 0.0, 2.0).perpendicular();
        assert_eq!(p, Vector3::new(0.0, -2.0, 0.0));
        assert!(p.length() > 0.0);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::ONE;
        v -= Vector3::new(0.0, 1.0, 0.0);
        v *= 2.0;
        v /= 4.0;
        assert_eq!(v, Vector3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_clamp_components() {
        let v = Vector3::new(-1.0, 5.0, 0.5);
        let clamped = v.clamp_components(Vector3::ZERO, Vector3::ONE);
        assert_eq!(clamped, Vector3::new(0.0, 1.0, 0.5));
    }
}
