use nalgebra as na;

/// Matrix of the conic section of an ellipse with semi-axis `a` along direction `theta`,
/// semi-axis `b` perpendicular to it and center `(x, y)` [1].
///
/// Points on the ellipse satisfy `pᵀ A p = 0` for `p = (x, y, 1)`, points inside give a
/// negative value.
///
/// [1] https://en.wikipedia.org/wiki/Matrix_representation_of_conic_sections
pub fn compute_matrix<F: na::RealField + Copy>(a: F, b: F, theta: F, x: F, y: F) -> na::Matrix3<F> {
    let two = na::convert::<f64, F>(2.0);

    let sin_theta = theta.sin();
    let cos_theta = theta.cos();
    let a_pow2 = a.powi(2);
    let b_pow2 = b.powi(2);
    let sin_theta_pow2 = sin_theta.powi(2);
    let cos_theta_pow2 = cos_theta.powi(2);

    let a_quad = a_pow2 * sin_theta_pow2 + b_pow2 * cos_theta_pow2;
    let b_quad = two * (b_pow2 - a_pow2) * cos_theta * sin_theta;
    let c_quad = a_pow2 * cos_theta_pow2 + b_pow2 * sin_theta_pow2;
    let d_quad = -two * a_quad * x - b_quad * y;
    let e_quad = -b_quad * x - two * c_quad * y;
    let f_quad = a_quad * x.powi(2) + b_quad * x * y + c_quad * y.powi(2) - a_pow2 * b_pow2;

    na::Matrix3::from_rows(&[
        [a_quad, b_quad / two, d_quad / two].into(),
        [b_quad / two, c_quad, e_quad / two].into(),
        [d_quad / two, e_quad / two, f_quad].into(),
    ])
}

/// Evaluates the quadratic form `pᵀ A p` at the homogeneous point `(x, y, 1)`.
pub fn evaluate<F: na::RealField + Copy>(matrix: &na::Matrix3<F>, point: &na::Point2<F>) -> F {
    let p = point.to_homogeneous();
    p.dot(&(matrix * p))
}
