use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::wasm::{rows_from_flat, to_js_error};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MatrixJs {
    pub(crate) inner: Matrix,
}

#[wasm_bindgen]
impl MatrixJs {
    /// Build from a flat row-major array of `rows * cols` values.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<MatrixJs, JsValue> {
        let elements = rows_from_flat(rows, cols, &data).map_err(|e| JsValue::from_str(&e))?;
        let inner = Matrix::new(elements).map_err(to_js_error)?;
        Ok(MatrixJs { inner })
    }

    #[wasm_bindgen(js_name = identity)]
    pub fn identity(size: usize) -> MatrixJs {
        MatrixJs { inner: Matrix::identity(size) }
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.inner.get(row, col).map(|x| x as f64)
    }

    pub fn add(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        let inner = self.inner.add(&other.inner).map_err(to_js_error)?;
        Ok(MatrixJs { inner })
    }

    pub fn subtract(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        let inner = self.inner.subtract(&other.inner).map_err(to_js_error)?;
        Ok(MatrixJs { inner })
    }

    pub fn multiply(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        let inner = self.inner.multiply(&other.inner).map_err(to_js_error)?;
        Ok(MatrixJs { inner })
    }

    #[wasm_bindgen(js_name = scalarMultiply)]
    pub fn scalar_multiply(&self, k: f64) -> MatrixJs {
        MatrixJs { inner: self.inner.scalar_multiply(k as Real) }
    }

    #[wasm_bindgen(js_name = scalarDivide)]
    pub fn scalar_divide(&self, k: f64) -> MatrixJs {
        MatrixJs { inner: self.inner.scalar_divide(k as Real) }
    }

    /// Flat row-major copy of the elements.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner
            .to_vec()
            .into_iter()
            .flatten()
            .map(|x| x as f64)
            .collect()
    }
}

// Rust-only conversions (not visible to JS)
impl From<Matrix> for MatrixJs {
    fn from(m: Matrix) -> Self {
        MatrixJs { inner: m }
    }
}

impl From<&MatrixJs> for Matrix {
    fn from(m: &MatrixJs) -> Self {
        m.inner.clone()
    }
}
