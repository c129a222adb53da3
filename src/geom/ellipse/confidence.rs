use super::EllipseResult;
use crate::geom::series::SampleSeries;
use crate::math::symmetric_eigen2;
use crate::stats;
use crate::DEFAULT_CONFIDENCE_LEVEL;
use log::debug;
use nalgebra as na;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Confidence level must lie strictly between 0 and 1, got {0}")]
    InvalidConfidenceLevel(f64),
}

/// Estimates the confidence ellipse of paired samples at a fixed confidence level.
///
/// ```
/// use scatter_geom::{ConfidenceEllipse, SampleSeries};
///
/// let series = SampleSeries::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 1.0, 4.0, 3.0])?;
/// let ellipse = ConfidenceEllipse::with_level(0.9)?.compute(&series);
/// assert_eq!(ellipse.center.x, 2.5);
/// # Ok::<(), scatter_geom::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEllipse<F: na::RealField + Copy> {
    level: F,
}

impl<F: na::RealField + Copy> Default for ConfidenceEllipse<F> {
    fn default() -> Self {
        Self {
            level: na::convert(DEFAULT_CONFIDENCE_LEVEL),
        }
    }
}

impl<F: na::RealField + Copy> ConfidenceEllipse<F> {
    /// Estimator at [DEFAULT_CONFIDENCE_LEVEL].
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator at `level`, rejected unless it lies strictly between 0 and 1.
    pub fn with_level(level: F) -> Result<Self, crate::Error> {
        if !(level > F::zero() && level < F::one()) {
            return Err(ConfigError::InvalidConfidenceLevel(to_f64(level)).into());
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> F {
        self.level
    }

    /// Confidence ellipse of `series` at this level, see [confidence_ellipse].
    pub fn compute(&self, series: &SampleSeries<F>) -> EllipseResult<F> {
        confidence_ellipse(series, self.level)
    }
}

fn to_f64<F: na::RealField + Copy>(value: F) -> f64 {
    na::try_convert::<F, f64>(value).unwrap_or(f64::NAN)
}

/// Sample deviation, replaced by 1 when it is zero, NaN or undefined.
fn deviation_or_one<F: na::RealField + Copy>(data: &[F], axis: &str) -> F {
    match stats::deviation(data) {
        Some(sd) if sd.is_finite() && sd != F::zero() => sd,
        _ => {
            debug!(
                "Deviation of {} is zero or not finite for {} samples, using 1",
                axis,
                data.len()
            );
            F::one()
        }
    }
}

/// Computes the ellipse that covers `level` of the probability mass of a bivariate
/// normal fitted to `series`.
///
/// The covariance matrix is built from the sample deviations and Pearson correlation,
/// and its eigenvectors give the principal axes. Both semi-axes are scaled by the
/// square root of the chi-square quantile with two degrees of freedom at `level`.
///
/// The series with the larger deviation receives the major semi-axis; on a tie both
/// `rx` and `ry` receive the minor one. Degenerate statistics fall back instead of
/// failing: a zero or undefined deviation is replaced by 1 and an undefined correlation
/// by 0. An empty series or a `level` outside `(0, 1)` gives a result with NaN fields,
/// see [EllipseResult::is_computable].
pub fn confidence_ellipse<F: na::RealField + Copy>(
    series: &SampleSeries<F>,
    level: F,
) -> EllipseResult<F> {
    let nan = na::convert::<f64, F>(f64::NAN);
    let (x, y) = (series.x(), series.y());

    let sd_x = deviation_or_one(x, "x");
    let sd_y = deviation_or_one(y, "y");
    let mean_x = stats::mean(x).unwrap_or(nan);
    let mean_y = stats::mean(y).unwrap_or(nan);

    let cor = stats::pearson(x, y).unwrap_or_else(|| {
        debug!("Correlation undefined for {} samples, using 0", series.len());
        F::zero()
    });
    let cov = cor * sd_x * sd_y;
    let covariance = na::Matrix2::new(sd_x * sd_x, cov, cov, sd_y * sd_y);
    let eigen = symmetric_eigen2(&covariance);

    let scale = na::convert::<f64, F>(stats::chi_squared_inv(to_f64(level), 2)).sqrt();

    // Covariance is positive semi-definite, a negative minimum is rounding noise.
    let min_eigenvalue = if eigen.min_eigenvalue() < F::zero() {
        F::zero()
    } else {
        eigen.min_eigenvalue()
    };
    let major = eigen.max_eigenvalue().sqrt() * scale;
    let minor = min_eigenvalue.sqrt() * scale;

    let rx = if sd_x > sd_y { major } else { minor };
    let ry = if sd_y > sd_x { major } else { minor };

    let v1 = eigen.major_axis();
    let mut theta = v1.y.atan2(v1.x);
    if theta < F::zero() {
        theta += F::two_pi();
    }

    EllipseResult {
        center: na::Point2::new(mean_x, mean_y),
        rx,
        ry,
        orientation_degrees: -(theta * na::convert::<f64, F>(180.0) / F::pi()),
        orientation_radians: theta,
    }
}
