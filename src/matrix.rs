//! Dense, row-major `Matrix` of [`Real`] values.
//!
//! Every algebraic operation allocates and returns a new `Matrix`; operands are
//! never modified. The only way to change a `Matrix` in place is the raw row
//! accessor (`m[i][j] = v`), which performs no revalidation.

use crate::errors::{GeometryError, Result};
use crate::float_types::{Real, tolerance};
use nalgebra::{DMatrix, Matrix3};
use std::fmt::{self, Display};
use std::ops::{Div, Index, IndexMut, Mul};

/// A rectangular grid of real numbers.
///
/// # Example
/// ```
/// use affine2d::Matrix;
///
/// let a = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::identity(2);
/// assert_eq!(a.multiply(&b).unwrap(), a);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    elements: Vec<Vec<Real>>,
}

impl Matrix {
    /// Build a matrix from a list of rows.
    ///
    /// Fails with [`GeometryError::RaggedRows`] if any row's length differs
    /// from the first row's. An empty list, or rows of length zero, produce a
    /// degenerate matrix with 0 in the corresponding dimension.
    pub fn new(elements: Vec<Vec<Real>>) -> Result<Self> {
        if let Some(first) = elements.first() {
            let expected = first.len();
            if let Some((row, found)) = elements
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(GeometryError::RaggedRows { row, expected, found });
            }
        }
        Ok(Self { elements })
    }

    /// `size`×`size` matrix with ones on the diagonal.
    pub fn identity(size: usize) -> Self {
        let elements = (0..size)
            .map(|i| (0..size).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { elements }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.elements.len()
    }

    /// Number of columns (0 for a matrix without rows).
    #[inline]
    pub fn cols(&self) -> usize {
        self.elements.first().map_or(0, Vec::len)
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Option<Real> {
        self.elements.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Independent nested copy of the elements.
    pub fn to_vec(&self) -> Vec<Vec<Real>> {
        self.elements.clone()
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiply every element by `k`.
    pub fn scalar_multiply(&self, k: Real) -> Matrix {
        let elements = self
            .elements
            .iter()
            .map(|row| row.iter().map(|&x| x * k).collect())
            .collect();
        Matrix { elements }
    }

    /// Multiply every element by `1 / k`.
    ///
    /// A zero `k` is not rejected: the result holds infinities or NaN.
    pub fn scalar_divide(&self, k: Real) -> Matrix {
        self.scalar_multiply(1.0 / k)
    }

    /// Dense matrix product `self · other`.
    ///
    /// Naive triple loop; each entry is accumulated from zero in increasing `k`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, "multiply"));
        }

        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let mut elements = vec![vec![0.0; p]; n];
        for (i, out_row) in elements.iter_mut().enumerate() {
            for (j, out) in out_row.iter_mut().enumerate() {
                let mut acc: Real = 0.0;
                for k in 0..m {
                    acc += self.elements[i][k] * other.elements[k][j];
                }
                *out = acc;
            }
        }
        Ok(Matrix { elements })
    }

    /// Same shape and every element within [`tolerance()`].
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        approx::AbsDiffEq::abs_diff_eq(self, other, tolerance())
    }

    fn same_shape(&self, other: &Matrix) -> bool {
        self.rows() == other.rows() && self.cols() == other.cols()
    }

    fn mismatch(&self, other: &Matrix, operation: &'static str) -> GeometryError {
        GeometryError::DimensionMismatch {
            operation,
            left: (self.rows(), self.cols()),
            right: (other.rows(), other.cols()),
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        operation: &'static str,
        f: impl Fn(Real, Real) -> Real,
    ) -> Result<Matrix> {
        if !self.same_shape(other) {
            return Err(self.mismatch(other, operation));
        }
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
            .collect();
        Ok(Matrix { elements })
    }
}

impl TryFrom<Vec<Vec<Real>>> for Matrix {
    type Error = GeometryError;

    fn try_from(elements: Vec<Vec<Real>>) -> Result<Self> {
        Matrix::new(elements)
    }
}

/// Raw row access. Writing through it (`m[i][j] = v`) bypasses all checks.
impl Index<usize> for Matrix {
    type Output = [Real];

    fn index(&self, row: usize) -> &[Real] {
        &self.elements[row]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut [Real] {
        &mut self.elements[row]
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: Real) -> Matrix {
        self.scalar_multiply(k)
    }
}

impl Mul<Real> for Matrix {
    type Output = Matrix;

    fn mul(self, k: Real) -> Matrix {
        self.scalar_multiply(k)
    }
}

impl Div<Real> for &Matrix {
    type Output = Matrix;

    fn div(self, k: Real) -> Matrix {
        self.scalar_divide(k)
    }
}

impl Div<Real> for Matrix {
    type Output = Matrix;

    fn div(self, k: Real) -> Matrix {
        self.scalar_divide(k)
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix(")?;
        write!(f, "[")?;
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{:?}", row)?;
        }
        write!(f, "])")
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Approximate comparison
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl approx::AbsDiffEq for Matrix {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.same_shape(other)
            && self
                .elements
                .iter()
                .flatten()
                .zip(other.elements.iter().flatten())
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Matrix {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.same_shape(other)
            && self
                .elements
                .iter()
                .flatten()
                .zip(other.elements.iter().flatten())
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        <Real as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.same_shape(other)
            && self
                .elements
                .iter()
                .flatten()
                .zip(other.elements.iter().flatten())
                .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
    }
}

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// nalgebra interop
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

impl From<&Matrix> for DMatrix<Real> {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_fn(m.rows(), m.cols(), |i, j| m.elements[i][j])
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(m: DMatrix<Real>) -> Self {
        let elements = m
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Matrix { elements }
    }
}

impl From<Matrix3<Real>> for Matrix {
    fn from(m: Matrix3<Real>) -> Self {
        let elements = (0..3).map(|i| (0..3).map(|j| m[(i, j)]).collect()).collect();
        Matrix { elements }
    }
}

impl TryFrom<&Matrix> for Matrix3<Real> {
    type Error = GeometryError;

    fn try_from(m: &Matrix) -> Result<Self> {
        if m.rows() != 3 || m.cols() != 3 {
            return Err(GeometryError::DimensionMismatch {
                operation: "convert",
                left: (m.rows(), m.cols()),
                right: (3, 3),
            });
        }
        Ok(Matrix3::from_fn(|i, j| m.elements[i][j]))
    }
}
