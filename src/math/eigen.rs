use nalgebra as na;

/// Eigen-decomposition of a real symmetric 2x2 matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen2<F: na::RealField + Copy> {
    /// Eigenvalues, largest first.
    pub eigenvalues: na::Vector2<F>,
    /// Unit eigenvectors stored as columns, in the order of `eigenvalues`.
    pub eigenvectors: na::Matrix2<F>,
}

impl<F: na::RealField + Copy> SymmetricEigen2<F> {
    pub fn max_eigenvalue(&self) -> F {
        self.eigenvalues[0]
    }

    pub fn min_eigenvalue(&self) -> F {
        self.eigenvalues[1]
    }

    /// Eigenvector of the largest eigenvalue.
    pub fn major_axis(&self) -> na::Vector2<F> {
        self.eigenvectors.column(0).into_owned()
    }

    /// Eigenvector of the smallest eigenvalue.
    pub fn minor_axis(&self) -> na::Vector2<F> {
        self.eigenvectors.column(1).into_owned()
    }
}

/// Flips `v` into the upper half plane (`y > 0`, or `y == 0` with `x > 0`).
fn canonical<F: na::RealField + Copy>(v: na::Vector2<F>) -> na::Vector2<F> {
    if v.y < F::zero() || (v.y == F::zero() && v.x < F::zero()) {
        -v
    } else {
        v
    }
}

/// Closed-form eigenpairs of the symmetric matrix `[[a, b], [b, c]]`.
///
/// Only the upper triangle of `matrix` is read. Eigenvalues come from the trace and
/// determinant: `(a + c) / 2 ± hypot((a - c) / 2, b)`. Eigenvectors are unit length and
/// canonicalised to the upper half plane, so the angle of either axis lies in `[0, π)`.
/// For a multiple of the identity the axes are the coordinate axes.
pub fn symmetric_eigen2<F: na::RealField + Copy>(matrix: &na::Matrix2<F>) -> SymmetricEigen2<F> {
    let a = matrix[(0, 0)];
    let b = matrix[(0, 1)];
    let c = matrix[(1, 1)];

    let two = na::convert::<f64, F>(2.0);
    let half_trace = (a + c) / two;
    let radius = ((a - c) / two).hypot(b);
    let lambda_max = half_trace + radius;
    let lambda_min = half_trace - radius;

    // Of the two rows of (A - λI), use the one with the larger diagonal gap.
    let major = if b == F::zero() {
        if a >= c {
            na::Vector2::x()
        } else {
            na::Vector2::y()
        }
    } else if a >= c {
        na::Vector2::new(lambda_max - c, b).normalize()
    } else {
        na::Vector2::new(b, lambda_max - a).normalize()
    };
    let major = canonical(major);
    let minor = canonical(na::Vector2::new(-major.y, major.x));

    SymmetricEigen2 {
        eigenvalues: na::Vector2::new(lambda_max, lambda_min),
        eigenvectors: na::Matrix2::from_columns(&[major, minor]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn assert_eigenpairs(matrix: &na::Matrix2<f64>, eig: &SymmetricEigen2<f64>) {
        for i in 0..2 {
            let v = eig.eigenvectors.column(i).into_owned();
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
            let lhs = matrix * v;
            let rhs = v * eig.eigenvalues[i];
            assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_diagonal_matrix() {
        let m = na::Matrix2::new(1.0, 0.0, 0.0, 4.0);
        let eig = symmetric_eigen2(&m);

        assert_relative_eq!(eig.max_eigenvalue(), 4.0);
        assert_relative_eq!(eig.min_eigenvalue(), 1.0);
        assert_relative_eq!(eig.major_axis(), na::Vector2::y());
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_identity_uses_coordinate_axes() {
        let eig = symmetric_eigen2(&na::Matrix2::<f64>::identity());

        assert_relative_eq!(eig.eigenvalues, na::Vector2::new(1.0, 1.0));
        assert_relative_eq!(eig.major_axis(), na::Vector2::x());
        assert_relative_eq!(eig.minor_axis(), na::Vector2::y());
    }

    #[test]
    fn test_rotated_matrices() {
        let angles = vec![PI / 6.0, PI / 4.0, PI / 3.0, 2.0 * PI / 3.0, 5.0 * PI / 6.0];

        for &theta in &angles {
            let rotation = na::Rotation2::new(theta);
            let r = rotation.matrix();
            let m = r * na::Matrix2::new(9.0, 0.0, 0.0, 1.0) * r.transpose();
            let eig = symmetric_eigen2(&m);

            assert_relative_eq!(eig.max_eigenvalue(), 9.0, epsilon = 1e-10);
            assert_relative_eq!(eig.min_eigenvalue(), 1.0, epsilon = 1e-10);

            let major = eig.major_axis();
            assert_relative_eq!(major.y.atan2(major.x), theta, epsilon = 1e-10);
            assert_eigenpairs(&m, &eig);
        }
    }

    #[test]
    fn test_matches_nalgebra_solver() {
        let m = na::Matrix2::new(2.5, 3.2, 3.2, 7.1);
        let eig = symmetric_eigen2(&m);
        let reference = m.symmetric_eigen();

        let mut expected: Vec<f64> = reference.eigenvalues.iter().copied().collect();
        expected.sort_by(|a, b| b.partial_cmp(a).unwrap());

        assert_relative_eq!(eig.max_eigenvalue(), expected[0], epsilon = 1e-10);
        assert_relative_eq!(eig.min_eigenvalue(), expected[1], epsilon = 1e-10);
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_singular_matrix() {
        // Perfectly correlated covariance: rank one.
        let m = na::Matrix2::new(1.0, 2.0, 2.0, 4.0);
        let eig = symmetric_eigen2(&m);

        assert_relative_eq!(eig.max_eigenvalue(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(eig.min_eigenvalue(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            eig.major_axis(),
            na::Vector2::new(1.0, 2.0).normalize(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_axes_in_upper_half_plane() {
        let m = na::Matrix2::new(4.0, -1.5, -1.5, 1.0);
        let eig = symmetric_eigen2(&m);

        for i in 0..2 {
            assert!(eig.eigenvectors[(1, i)] >= 0.0);
        }
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_nan_propagates() {
        let m = na::Matrix2::new(1.0, f64::NAN, f64::NAN, 1.0);
        let eig = symmetric_eigen2(&m);
        assert!(eig.max_eigenvalue().is_nan());
    }
}
