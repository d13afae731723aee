use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::point::Point2;
use wasm_bindgen::prelude::*;

pub mod matrix_js;
pub mod point_js;
pub mod transformer_js;

fn to_js_error(err: GeometryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Split a flat row-major array into `rows` rows of `cols` values.
fn rows_from_flat(rows: usize, cols: usize, data: &[f64]) -> Result<Vec<Vec<Real>>, String> {
    let expected = rows
        .checked_mul(cols)
        .ok_or_else(|| format!("a {}x{} matrix is too large", rows, cols))?;
    if expected != data.len() {
        return Err(format!(
            "expected {} values for a {}x{} matrix, got {}",
            expected,
            rows,
            cols,
            data.len()
        ));
    }
    if cols == 0 {
        return Ok(vec![Vec::new(); rows]);
    }
    Ok(data
        .chunks(cols)
        .map(|row| row.iter().map(|&x| x as Real).collect())
        .collect())
}

/// Pair up a flat `[x0, y0, x1, y1, …]` array into points.
fn points_from_flat(coords: &[f64]) -> Result<Vec<Point2>, String> {
    if coords.len() % 2 != 0 {
        return Err(format!(
            "expected an even number of coordinates, got {}",
            coords.len()
        ));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Point2::new(c[0] as Real, c[1] as Real))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn odd_coordinate_count_is_rejected() {
        assert!(points_from_flat(&[0.0, 0.0, 5.0]).is_err());
        assert_eq!(
            points_from_flat(&[0.0, 1.0, 5.0, 6.0]).unwrap(),
            vec![Point2::new(0.0, 1.0), Point2::new(5.0, 6.0)]
        );
    }

    #[test]
    fn matrix_size_overflow_is_rejected() {
        assert!(rows_from_flat(usize::MAX, 2, &[]).is_err());
        assert!(rows_from_flat(2, 2, &[1.0, 2.0, 3.0]).is_err());
        assert_eq!(rows_from_flat(3, 0, &[]).unwrap().len(), 3);
        assert_eq!(
            rows_from_flat(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }
}
