//! 4x4 matrix construction and algebra
//!
//! Matrices are row-major and follow the row-vector convention: a point is
//! transformed as `v' = v · M`, so the translation lives in row 3 and
//! `A · B` applies `A` first, then `B`. Every constructor in this crate is
//! written against that convention; composing them in the opposite order
//! gives wrong results without any error.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{MathError, Vector3};

/// Largest `|det| / determinant_bound` still treated as singular
///
/// Sits well above the rounding error of the cofactor expansion in `f32`.
const SINGULAR_TOLERANCE: f32 = 1e-5;

/// 4x4 matrix (row-major, row-vector convention)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from its rows
    #[inline]
    pub const fn new(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Scale along each axis
    pub fn make_scale(scale: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.m[0][0] = scale.x;
        result.m[1][1] = scale.y;
        result.m[2][2] = scale.z;
        result
    }

    /// Translation (stored in row 3)
    pub fn make_translate(translate: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        result.m[3][0] = translate.x;
        result.m[3][1] = translate.y;
        result.m[3][2] = translate.z;
        result
    }

    /// Rotation about the X axis
    pub fn make_rotate_x(radian: f32) -> Self {
        let (sn, cs) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[1][1] = cs;
        result.m[1][2] = sn;
        result.m[2][1] = -sn;
        result.m[2][2] = cs;
        result
    }

    /// Rotation about the Y axis
    pub fn make_rotate_y(radian: f32) -> Self {
        let (sn, cs) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = cs;
        result.m[0][2] = -sn;
        result.m[2][0] = sn;
        result.m[2][2] = cs;
        result
    }

    /// Rotation about the Z axis
    pub fn make_rotate_z(radian: f32) -> Self {
        let (sn, cs) = radian.sin_cos();
        let mut result = Self::IDENTITY;
        result.m[0][0] = cs;
        result.m[0][1] = sn;
        result.m[1][0] = -sn;
        result.m[1][1] = cs;
        result
    }

    /// Euler rotation applied X, then Y, then Z
    pub fn make_rotate(rotate: Vector3) -> Self {
        Self::make_rotate_x(rotate.x) * Self::make_rotate_y(rotate.y) * Self::make_rotate_z(rotate.z)
    }

    /// Affine transform applied as scale, then rotate, then translate
    pub fn make_affine(scale: Vector3, rotate: Vector3, translate: Vector3) -> Self {
        Self::make_scale(scale) * Self::make_rotate(rotate) * Self::make_translate(translate)
    }

    /// Combine matching [row][col] elements of two matrices
    #[allow(clippy::needless_range_loop)]
    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = f(self.m[row][col], other.m[row][col]);
            }
        }
        Self::new(result)
    }

    /// Element-wise sum
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Matrix product `self · other` (applies `self` first)
    #[allow(clippy::needless_range_loop)]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0f32; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                for k in 0..4 {
                    result[row][col] += self.m[row][k] * other.m[k][col];
                }
            }
        }
        Self::new(result)
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Determinant of the 3x3 matrix left after removing `row` and `col`
    fn minor(&self, row: usize, col: usize) -> f32 {
        let mut sub = [[0.0f32; 3]; 3];
        let mut r = 0;
        for i in (0..4).filter(|&i| i != row) {
            let mut c = 0;
            for j in (0..4).filter(|&j| j != col) {
                sub[r][c] = self.m[i][j];
                c += 1;
            }
            r += 1;
        }

        sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
            - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
            + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
    }

    /// Signed minor
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col)
    }

    /// Determinant by cofactor expansion along row 0
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self.m[0][col] * self.cofactor(0, col)).sum()
    }

    /// Upper bound on `|determinant|`: the product of the rows' L1 norms
    fn determinant_bound(&self) -> f32 {
        self.m
            .iter()
            .map(|row| row.iter().map(|v| v.abs()).sum::<f32>())
            .product()
    }

    /// General inverse via the adjugate
    ///
    /// Fails with [`MathError::Singular`] when the determinant is zero relative
    /// to the magnitude of the rows, so rank-deficient input whose determinant
    /// only rounds to a tiny non-zero value is rejected too.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if !determinant.is_finite() {
            return Err(MathError::NonFinite);
        }
        if determinant.abs() <= SINGULAR_TOLERANCE * self.determinant_bound() {
            return Err(MathError::Singular { determinant });
        }

        let inv_det = 1.0 / determinant;
        let mut result = [[0.0f32; 4]; 4];
        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                // adjugate is the transposed cofactor matrix
                *value = self.cofactor(col, row) * inv_det;
            }
        }
        Ok(Self::new(result))
    }

    /// Transform a point (implicit w = 1) and divide by the resulting w
    ///
    /// Fails with [`MathError::ZeroW`] when the resulting w is exactly zero.
    pub fn transform_point(&self, point: Vector3) -> Result<Vector3, MathError> {
        let m = &self.m;
        let x = point.x * m[0][0] + point.y * m[1][0] + point.z * m[2][0] + m[3][0];
        let y = point.x * m[0][1] + point.y * m[1][1] + point.z * m[2][1] + m[3][1];
        let z = point.x * m[0][2] + point.y * m[1][2] + point.z * m[2][2] + m[3][2];
        let w = point.x * m[0][3] + point.y * m[1][3] + point.z * m[2][3] + m[3][3];
        if w == 0.0 {
            return Err(MathError::ZeroW);
        }
        Ok(Vector3::new(x / w, y / w, z / w))
    }

    /// Transform a direction (implicit w = 0): translation is ignored, no divide
    pub fn transform_normal(&self, direction: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            direction.x * m[0][0] + direction.y * m[1][0] + direction.z * m[2][0],
            direction.x * m[0][1] + direction.y * m[1][1] + direction.z * m[2][1],
            direction.x * m[0][2] + direction.y * m[1][2] + direction.z * m[2][2],
        )
    }

    /// True when every element differs by less than `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

/// Transform `point` by `m` with the homogeneous divide
///
/// Free-function form of [`Matrix4x4::transform_point`], argument order `v · M`.
#[inline]
pub fn transform(point: Vector3, m: &Matrix4x4) -> Result<Vector3, MathError> {
    m.transform_point(point)
}

/// Transform a direction by `m` without translation
#[inline]
pub fn transform_normal(direction: Vector3, m: &Matrix4x4) -> Vector3 {
    m.transform_normal(direction)
}

impl std::ops::Add for Matrix4x4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Matrix4x4::add(&self, &other)
    }
}

impl std::ops::Sub for Matrix4x4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.subtract(&other)
    }
}

impl std::ops::Mul for Matrix4x4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}
