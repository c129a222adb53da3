use crate::math::conic;
use nalgebra as na;

/// A rotated ellipse in the plane, as produced by the confidence ellipse estimator.
///
/// `rx` and `ry` are kept exactly as assigned by the estimator; which of them is the
/// major axis depends on which input series has the larger deviation. The major axis
/// points along `orientation_radians`, measured counter-clockwise from the x-axis.
/// `orientation_degrees` is the same angle negated, for renderers that rotate clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseResult<F: na::RealField + Copy> {
    /// Center, the means of the two series
    pub center: na::Point2<F>,
    /// Semi-axis assigned to x
    pub rx: F,
    /// Semi-axis assigned to y
    pub ry: F,
    /// Clockwise rotation in degrees
    pub orientation_degrees: F,
    /// Counter-clockwise rotation in radians, in `[0, 2π)`
    pub orientation_radians: F,
}

impl<F: na::RealField + Copy> EllipseResult<F> {
    pub fn semi_major(&self) -> F {
        if self.rx >= self.ry {
            self.rx
        } else {
            self.ry
        }
    }

    pub fn semi_minor(&self) -> F {
        if self.rx >= self.ry {
            self.ry
        } else {
            self.rx
        }
    }

    /// False if any component is NaN or infinite, in which case the ellipse should not
    /// be drawn.
    pub fn is_computable(&self) -> bool {
        [
            self.center.x,
            self.center.y,
            self.rx,
            self.ry,
            self.orientation_degrees,
            self.orientation_radians,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Conic matrix with the major axis along `orientation_radians`.
    pub fn to_conic_matrix(&self) -> na::Matrix3<F> {
        conic::compute_matrix(
            self.semi_major(),
            self.semi_minor(),
            self.orientation_radians,
            self.center.x,
            self.center.y,
        )
    }

    /// Returns true if `point` lies inside or on the ellipse.
    pub fn contains(&self, point: &na::Point2<F>) -> bool {
        conic::evaluate(&self.to_conic_matrix(), point) <= F::zero()
    }
}
