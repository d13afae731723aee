//! A small **2D affine geometry** toolkit: a dense [`Matrix`] with the usual algebra,
//! and an [`AffineTransformer`] that composes translations, scalings, rotations and
//! shears in homogeneous coordinates and applies them to batches of points.
//!
//! ```
//! use affine2d::{AffineTransformer, Point2};
//!
//! let mut t = AffineTransformer::new();
//! t.rotate(90.0).translate(0.0, 5.0);
//!
//! let out = t.apply(&[Point2::new(1.0, 0.0)]).unwrap();
//! assert!((out[0].x - 0.0).abs() < 1e-12);
//! assert!((out[0].y - 6.0).abs() < 1e-12);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` wrappers for `Matrix`, `AffineTransformer` and points

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod frame;
pub mod matrix;
pub mod point;
pub mod transformer;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GeometryError, Result};
pub use frame::ReferenceFrame;
pub use matrix::Matrix;
pub use point::{Planar, Point2};
pub use transformer::AffineTransformer;
