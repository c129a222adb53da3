use crate::EllipseResult;
use nalgebra as na;

/// Samples `num_points` points evenly in parameter along the boundary of `ellipse`.
///
/// Point `i` is `center + R(θ) · (a cos t, b sin t)` with `t = 2πi / num_points`,
/// `θ = orientation_radians` and `a`, `b` the semi-major and semi-minor axes. The points
/// therefore lie on [EllipseResult::to_conic_matrix] whichever of `rx`, `ry` is larger.
pub fn sample_ellipse_points<F: na::RealField + Copy>(
    ellipse: &EllipseResult<F>,
    num_points: usize,
) -> Vec<na::Point2<F>> {
    let rotation = na::Rotation2::new(ellipse.orientation_radians);
    let step = F::two_pi() / na::convert::<f64, F>(num_points as f64);
    let (a, b) = (ellipse.semi_major(), ellipse.semi_minor());

    (0..num_points)
        .map(|i| {
            let t = step * na::convert::<f64, F>(i as f64);
            let local = na::Vector2::new(a * t.cos(), b * t.sin());
            ellipse.center + rotation.transform_vector(&local)
        })
        .collect()
}
