mod support;

use affine2d::{
    AffineTransformer, GeometryError, Matrix, Point2,
    float_types::{FRAC_PI_2, Real},
};
use support::assert_points_close;

#[test]
fn translation_is_applied_before_scaling_when_registered_first() {
    let mut t = AffineTransformer::new();
    t.translate(1.0, 0.0).scale(2.0, 2.0);

    let out = t.apply(&[Point2::new(1.0, 1.0)]).unwrap();
    assert_eq!(out, vec![Point2::new(4.0, 2.0)]);
}

#[test]
fn scaling_then_translation_gives_a_different_result() {
    let mut t = AffineTransformer::new();
    t.scale(2.0, 2.0).translate(1.0, 0.0);

    let out = t.apply(&[Point2::new(1.0, 1.0)]).unwrap();
    assert_eq!(out, vec![Point2::new(3.0, 2.0)]);
}

#[test]
fn rotation_in_degrees_is_counter_clockwise() {
    let mut t = AffineTransformer::new();
    t.rotate(90.0);

    let out = t.apply(&[Point2::new(1.0, 0.0)]).unwrap();
    assert_points_close(&out, &[Point2::new(0.0, 1.0)], 1e-12);
}

#[test]
fn rotation_in_radians_matches_degrees() {
    let mut deg = AffineTransformer::new();
    deg.rotate(90.0);
    let mut rad = AffineTransformer::new();
    rad.rotate_radians(FRAC_PI_2);

    let pts = [Point2::new(2.0, 3.0), Point2::new(-1.0, 0.5)];
    let a = deg.apply(&pts).unwrap();
    let b = rad.apply(&pts).unwrap();
    assert_points_close(&a, &b, 1e-12);
    assert_points_close(&a, &[Point2::new(-3.0, 2.0), Point2::new(-0.5, -1.0)], 1e-12);
}

#[test]
fn shear_uses_reference_lines() {
    let mut t = AffineTransformer::new();
    t.shear(2.0, 1.0, 0.0, 0.0);
    // x' = x + 2 * (y - 1)
    let out = t.apply(&[Point2::new(0.0, 1.0), Point2::new(0.0, 3.0)]).unwrap();
    assert_eq!(out, vec![Point2::new(0.0, 1.0), Point2::new(4.0, 3.0)]);

    let mut v = AffineTransformer::new();
    v.shear_y(0.5, 2.0);
    // y' = y + 0.5 * (x - 2)
    let out = v.apply(&[Point2::new(4.0, 0.0)]).unwrap();
    assert_eq!(out, vec![Point2::new(4.0, 1.0)]);
}

#[test]
fn shear_x_is_shear_with_zero_vertical_part() {
    let mut a = AffineTransformer::new();
    a.shear_x(1.5, -2.0);
    let mut b = AffineTransformer::new();
    b.shear(1.5, -2.0, 0.0, 0.0);
    assert_eq!(a.operators(), b.operators());
}

#[test]
fn empty_pipeline_is_an_error() {
    let fresh = AffineTransformer::new();
    assert_eq!(
        fresh.apply(&[Point2::new(1.0, 1.0)]).unwrap_err(),
        GeometryError::EmptyPipeline
    );
    assert_eq!(fresh.composite().unwrap_err(), GeometryError::EmptyPipeline);

    let mut cleared = AffineTransformer::new();
    cleared.translate(3.0, 4.0).clear();
    assert_eq!(
        cleared.apply(&[Point2::new(1.0, 1.0)]).unwrap_err(),
        GeometryError::EmptyPipeline
    );
}

#[test]
fn empty_input_with_registered_operators_yields_empty_output() {
    let mut t = AffineTransformer::new();
    t.translate(1.0, 1.0);
    let out = t.apply::<Point2>(&[]).unwrap();
    assert!(out.is_empty());
}

#[test]
fn apply_is_repeatable_and_leaves_inputs_alone() {
    let mut t = AffineTransformer::new();
    t.rotate(30.0).scale(1.5, 0.5).translate(-2.0, 7.0);

    let pts = vec![Point2::new(1.0, 2.0), Point2::new(-3.0, 0.5), Point2::new(0.0, 0.0)];
    let before = pts.clone();
    let ops_before: Vec<Matrix> = t.operators().to_vec();

    let first = t.apply(&pts).unwrap();
    let second = t.apply(&pts).unwrap();

    assert_eq!(first, second);
    assert_eq!(pts, before);
    assert_eq!(t.operators(), ops_before.as_slice());
    assert_eq!(first.len(), pts.len());
}

#[test]
fn clear_allows_reuse() {
    let mut t = AffineTransformer::new();
    t.scale(10.0, 10.0);
    t.clear().translate(1.0, 2.0);

    let out = t.apply(&[Point2::origin()]).unwrap();
    assert_eq!(out, vec![Point2::new(1.0, 2.0)]);
}

#[test]
fn sequential_application_matches_composite() {
    let mut t = AffineTransformer::new();
    t.translate(1.0, -1.0)
        .rotate(45.0)
        .shear(0.3, 0.0, 0.1, 0.0)
        .scale(2.0, 3.0);

    let p = Point2::new(0.7, -1.3);
    let mut step = p;
    for op in t.operators() {
        let column = Matrix::new(vec![vec![step.x], vec![step.y], vec![1.0]]).unwrap();
        let out = op.multiply(&column).unwrap();
        step = Point2::new(out[0][0], out[1][0]);
    }

    let out = t.apply(&[p]).unwrap();
    assert_points_close(&out, &[step], 1e-12);
}

#[test]
fn works_with_geo_points() {
    let mut t = AffineTransformer::new();
    t.translate(1.0, 2.0);

    let coords = t.apply(&[geo::Coord { x: 0.0, y: 0.0 }]).unwrap();
    assert_eq!(coords, vec![geo::Coord { x: 1.0, y: 2.0 }]);

    let points = t.apply(&[geo::Point::new(5.0, 5.0)]).unwrap();
    assert_eq!(points, vec![geo::Point::new(6.0, 7.0)]);
}

#[test]
fn composite_converts_to_nalgebra() {
    let mut t = AffineTransformer::new();
    t.translate(3.0, 4.0).scale(2.0, 2.0);

    let m3 = nalgebra::Matrix3::<Real>::try_from(&t.composite().unwrap()).unwrap();
    let moved = m3.transform_point(&Point2::new(1.0, 1.0));
    assert_eq!(moved, Point2::new(8.0, 10.0));
}
