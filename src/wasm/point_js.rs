use crate::float_types::Real;
use crate::point::Point2;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct Point2Js {
    pub(crate) inner: Point2,
}

#[wasm_bindgen]
impl Point2Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Point2Js {
        Point2Js {
            inner: Point2::new(x as Real, y as Real),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }
}

// Rust-only conversions (not visible to JS)
impl From<Point2> for Point2Js {
    fn from(p: Point2) -> Self {
        Point2Js { inner: p }
    }
}

impl From<&Point2Js> for Point2 {
    fn from(p: &Point2Js) -> Self {
        p.inner
    }
}
