use crate::EllipseResult;
use nalgebra as na;

/// Control-point offset of a quarter ellipse drawn as one cubic Bézier, relative to the
/// semi-axis length.
pub const KAPPA: f64 = 0.5522848;

/// One cubic Bézier segment, continuing from the end point of the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSegment<F: na::RealField + Copy> {
    pub ctrl1: na::Point2<F>,
    pub ctrl2: na::Point2<F>,
    pub to: na::Point2<F>,
}

/// Closed path of four cubic segments approximating an ellipse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipsePath<F: na::RealField + Copy> {
    pub start: na::Point2<F>,
    pub segments: [CubicSegment<F>; 4],
}

/// Builds the Bézier outline of `ellipse` for a custom chart shape.
///
/// The outline is laid out in the ellipse frame with the semi-major axis `a` on the
/// local x-axis: it starts at `(-a, 0)` and visits `(0, -b)`, `(a, 0)`, `(0, b)` before
/// closing. Every point is then rotated by `orientation_radians` and moved to the center.
pub fn ellipse_path<F: na::RealField + Copy>(ellipse: &EllipseResult<F>) -> EllipsePath<F> {
    let a = ellipse.semi_major();
    let b = ellipse.semi_minor();
    let kappa = na::convert::<f64, F>(KAPPA);
    let (ox, oy) = (a * kappa, b * kappa);
    let zero = F::zero();

    let transform = na::Isometry2::new(ellipse.center.coords, ellipse.orientation_radians);
    let p = |x: F, y: F| transform.transform_point(&na::Point2::new(x, y));
    let segment = |c1: (F, F), c2: (F, F), to: (F, F)| CubicSegment {
        ctrl1: p(c1.0, c1.1),
        ctrl2: p(c2.0, c2.1),
        to: p(to.0, to.1),
    };

    EllipsePath {
        start: p(-a, zero),
        segments: [
            segment((-a, -oy), (-ox, -b), (zero, -b)),
            segment((ox, -b), (a, -oy), (a, zero)),
            segment((a, oy), (ox, b), (zero, b)),
            segment((-ox, b), (-a, oy), (-a, zero)),
        ],
    }
}
