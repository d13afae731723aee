//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use affine2d::{Matrix, Point2, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Build a matrix from borrowed rows, panicking on ragged input.
pub fn matrix(rows: &[&[Real]]) -> Matrix {
    Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).expect("rectangular test matrix")
}

/// Assert two point lists agree coordinate-wise within `eps`.
pub fn assert_points_close(actual: &[Point2], expected: &[Point2], eps: Real) {
    assert_eq!(actual.len(), expected.len(), "point count differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(a.x, e.x, eps) && approx_eq(a.y, e.y, eps),
            "point {} is {:?}, expected {:?}",
            i,
            a,
            e
        );
    }
}
