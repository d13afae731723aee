//! Rectangular coordinate reference frames and per-axis remapping between them.

use crate::float_types::Real;
use crate::point::Planar;

/// An axis-aligned rectangular coordinate frame `[xmin, xmax] × [ymin, ymax]`.
///
/// Remapping interpolates each axis independently, so it does not go through
/// [`Matrix`](crate::matrix::Matrix). A degenerate source axis (`min == max`)
/// is not rejected and yields infinities or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    xmin: Real,
    xmax: Real,
    ymin: Real,
    ymax: Real,
}

impl ReferenceFrame {
    pub const fn new(xmin: Real, xmax: Real, ymin: Real, ymax: Real) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    pub const fn xmin(&self) -> Real {
        self.xmin
    }

    pub const fn xmax(&self) -> Real {
        self.xmax
    }

    pub const fn ymin(&self) -> Real {
        self.ymin
    }

    pub const fn ymax(&self) -> Real {
        self.ymax
    }

    /// Linearly map `coordinate` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
    #[inline]
    pub fn remap_coordinate(
        coordinate: Real,
        src_min: Real,
        src_max: Real,
        dst_min: Real,
        dst_max: Real,
    ) -> Real {
        (coordinate - src_min) * (dst_max - dst_min) / (src_max - src_min) + dst_min
    }

    /// Map points expressed in `source` into this frame.
    pub fn transform_from<P: Planar>(&self, source: &ReferenceFrame, points: &[P]) -> Vec<P> {
        remap(source, self, points)
    }

    /// Map points expressed in this frame into `target`.
    pub fn transform_to<P: Planar>(&self, target: &ReferenceFrame, points: &[P]) -> Vec<P> {
        remap(self, target, points)
    }
}

fn remap<P: Planar>(src: &ReferenceFrame, dst: &ReferenceFrame, points: &[P]) -> Vec<P> {
    points
        .iter()
        .map(|p| {
            P::from_xy(
                ReferenceFrame::remap_coordinate(p.x(), src.xmin, src.xmax, dst.xmin, dst.xmax),
                ReferenceFrame::remap_coordinate(p.y(), src.ymin, src.ymax, dst.ymin, dst.ymax),
            )
        })
        .collect()
}
