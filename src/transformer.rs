//! Composition of 2D affine transformations in homogeneous coordinates.
//!
//! An [`AffineTransformer`] records elementary 3×3 operators in call order and
//! folds them into one composite when points are transformed. The operation
//! registered first is applied to the points first.

use crate::errors::{GeometryError, Result};
use crate::float_types::{Real, tolerance};
use crate::matrix::Matrix;
use crate::point::Planar;

/// Builder of a composite affine transformation.
///
/// # Example
/// ```
/// use affine2d::{AffineTransformer, Point2};
///
/// let mut transformer = AffineTransformer::new();
/// transformer.translate(1.0, 0.0).scale(2.0, 2.0);
///
/// // translate first, then scale: (1, 1) -> (2, 1) -> (4, 2)
/// let moved = transformer.apply(&[Point2::new(1.0, 1.0)]).unwrap();
/// assert_eq!(moved, vec![Point2::new(4.0, 2.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AffineTransformer {
    operators: Vec<Matrix>,
}

impl AffineTransformer {
    pub fn new() -> Self {
        Self { operators: Vec::new() }
    }

    /// Forget every registered operator.
    pub fn clear(&mut self) -> &mut Self {
        self.operators.clear();
        self
    }

    /// Registered elementary operators, in registration order.
    pub fn operators(&self) -> &[Matrix] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Register a translation by `(tx, ty)`.
    pub fn translate(&mut self, tx: Real, ty: Real) -> &mut Self {
        let mut op = Matrix::identity(3);
        op[0][2] = tx;
        op[1][2] = ty;
        self.push("translate", op)
    }

    /// Register a scaling about the origin.
    pub fn scale(&mut self, sx: Real, sy: Real) -> &mut Self {
        let mut op = Matrix::identity(3);
        op[0][0] = sx;
        op[1][1] = sy;
        self.push("scale", op)
    }

    /// Register a rotation about the origin by `degrees` (positive is counter-clockwise).
    pub fn rotate(&mut self, degrees: Real) -> &mut Self {
        self.rotate_radians(degrees.to_radians())
    }

    /// Register a rotation about the origin by `radians` (positive is counter-clockwise).
    pub fn rotate_radians(&mut self, radians: Real) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let mut op = Matrix::identity(3);
        op[0][0] = cos;
        op[1][1] = cos;
        op[0][1] = -sin;
        op[1][0] = sin;
        self.push("rotate", op)
    }

    /// Register a shear.
    ///
    /// `x' = x + shx * (y - yref)` and `y' = y + shy * (x - xref)`.
    pub fn shear(&mut self, shx: Real, yref: Real, shy: Real, xref: Real) -> &mut Self {
        let mut op = Matrix::identity(3);
        op[0][1] = shx;
        op[0][2] = -shx * yref;
        op[1][0] = shy;
        op[1][2] = -shy * xref;
        self.push("shear", op)
    }

    /// Horizontal shear relative to the line `y = yref`.
    pub fn shear_x(&mut self, shx: Real, yref: Real) -> &mut Self {
        self.shear(shx, yref, 0.0, 0.0)
    }

    /// Vertical shear relative to the line `x = xref`.
    pub fn shear_y(&mut self, shy: Real, xref: Real) -> &mut Self {
        self.shear(0.0, 0.0, shy, xref)
    }

    /// Fold the registered operators into a single 3×3 matrix.
    ///
    /// The product is `op[last] · … · op[first]`, so applying it to a column
    /// vector runs the operators in registration order.
    pub fn composite(&self) -> Result<Matrix> {
        let mut ops = self.operators.iter().rev();
        let first = ops.next().ok_or(GeometryError::EmptyPipeline)?;
        let composite = ops.try_fold(first.clone(), |acc, op| acc.multiply(op))?;
        log::trace!("folded {} operators into {:?}", self.operators.len(), composite);
        Ok(composite)
    }

    /// Transform every point with the composite operator.
    ///
    /// Output has the same length and order as `points`. The homogeneous
    /// coordinate is dropped without renormalisation.
    pub fn apply<P: Planar>(&self, points: &[P]) -> Result<Vec<P>> {
        let composite = self.composite()?;
        points
            .iter()
            .map(|p| -> Result<P> {
                let column = Matrix::new(vec![vec![p.x()], vec![p.y()], vec![1.0]])?;
                let out = composite.multiply(&column)?;
                let w = out[2][0];
                if (w - 1.0).abs() > tolerance() {
                    log::debug!("homogeneous coordinate drifted to {} (not renormalised)", w);
                }
                Ok(P::from_xy(out[0][0], out[1][0]))
            })
            .collect()
    }

    fn push(&mut self, kind: &str, op: Matrix) -> &mut Self {
        log::trace!("registering {} operator #{}", kind, self.operators.len());
        self.operators.push(op);
        self
    }
}
