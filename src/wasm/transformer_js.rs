use crate::float_types::Real;
use crate::point::Point2;
use crate::transformer::AffineTransformer;
use crate::wasm::{matrix_js::MatrixJs, point_js::Point2Js, points_from_flat, to_js_error};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Default)]
pub struct AffineTransformerJs {
    inner: AffineTransformer,
}

#[wasm_bindgen]
impl AffineTransformerJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AffineTransformerJs {
        AffineTransformerJs { inner: AffineTransformer::new() }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.inner.translate(tx as Real, ty as Real);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.inner.scale(sx as Real, sy as Real);
    }

    /// Rotation in degrees unless `in_radians` is set.
    pub fn rotate(&mut self, theta: f64, in_radians: bool) {
        if in_radians {
            self.inner.rotate_radians(theta as Real);
        } else {
            self.inner.rotate(theta as Real);
        }
    }

    pub fn shear(&mut self, shx: f64, yref: f64, shy: f64, xref: f64) {
        self.inner
            .shear(shx as Real, yref as Real, shy as Real, xref as Real);
    }

    pub fn composite(&self) -> Result<MatrixJs, JsValue> {
        let m = self.inner.composite().map_err(to_js_error)?;
        Ok(m.into())
    }

    /// Transform a flat `[x0, y0, x1, y1, …]` array. An odd length is an error.
    #[wasm_bindgen(js_name = applyFlat)]
    pub fn apply_flat(&self, coords: Vec<f64>) -> Result<Vec<f64>, JsValue> {
        let points = points_from_flat(&coords).map_err(|e| JsValue::from_str(&e))?;
        let moved = self.inner.apply(&points).map_err(to_js_error)?;
        Ok(moved
            .into_iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect())
    }

    #[wasm_bindgen(js_name = applyPoint)]
    pub fn apply_point(&self, point: &Point2Js) -> Result<Point2Js, JsValue> {
        let moved = self
            .inner
            .apply(&[Point2::from(point)])
            .map_err(to_js_error)?;
        Ok(moved[0].into())
    }
}
