//! The point contract consumed and produced by the transformer and the frame remapper.
//!
//! Any type with two readable real coordinates that can be rebuilt from `(x, y)`
//! qualifies. Implementations are provided for the nalgebra and geo point types.

use crate::float_types::Real;

/// Default point type of the crate.
pub type Point2 = nalgebra::Point2<Real>;

/// A 2D point that can be lifted into homogeneous coordinates and rebuilt afterwards.
pub trait Planar: Sized {
    fn x(&self) -> Real;
    fn y(&self) -> Real;
    fn from_xy(x: Real, y: Real) -> Self;
}

impl Planar for nalgebra::Point2<Real> {
    #[inline]
    fn x(&self) -> Real {
        self.coords.x
    }

    #[inline]
    fn y(&self) -> Real {
        self.coords.y
    }

    #[inline]
    fn from_xy(x: Real, y: Real) -> Self {
        nalgebra::Point2::new(x, y)
    }
}

impl Planar for geo::Coord<Real> {
    #[inline]
    fn x(&self) -> Real {
        self.x
    }

    #[inline]
    fn y(&self) -> Real {
        self.y
    }

    #[inline]
    fn from_xy(x: Real, y: Real) -> Self {
        geo::Coord { x, y }
    }
}

impl Planar for geo::Point<Real> {
    #[inline]
    fn x(&self) -> Real {
        geo::Point::x(*self)
    }

    #[inline]
    fn y(&self) -> Real {
        geo::Point::y(*self)
    }

    #[inline]
    fn from_xy(x: Real, y: Real) -> Self {
        geo::Point::new(x, y)
    }
}
