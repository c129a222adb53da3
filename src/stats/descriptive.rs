use itertools::Itertools;
use nalgebra as na;

fn count<F: na::RealField + Copy>(n: usize) -> F {
    na::convert::<f64, F>(n as f64)
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean<F: na::RealField + Copy>(data: &[F]) -> Option<F> {
    if data.is_empty() {
        return None;
    }
    let sum = data.iter().fold(F::zero(), |acc, &v| acc + v);
    Some(sum / count(data.len()))
}

/// Sample standard deviation with Bessel's correction (denominator `n - 1`).
///
/// Returns `None` for fewer than two samples.
pub fn deviation<F: na::RealField + Copy>(data: &[F]) -> Option<F> {
    if data.len() < 2 {
        return None;
    }
    let mean = mean(data)?;
    let sum_sq = data
        .iter()
        .fold(F::zero(), |acc, &v| acc + (v - mean).powi(2));
    Some((sum_sq / count(data.len() - 1)).sqrt())
}

/// Pearson correlation coefficient of two paired samples.
///
/// Returns `None` if the slices differ in length, hold fewer than two samples, or if
/// either sample has zero variance.
pub fn pearson<F: na::RealField + Copy>(x: &[F], y: &[F]) -> Option<F> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (sxy, sxx, syy) = x.iter().zip_eq(y).fold(
        (F::zero(), F::zero(), F::zero()),
        |(sxy, sxx, syy), (&xi, &yi)| {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
        },
    );

    let denominator = (sxx * syy).sqrt();
    if denominator == F::zero() {
        return None;
    }
    Some(sxy / denominator)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paired(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (2..=max_len).prop_flat_map(|n| {
            (
                proptest::collection::vec(-1e3f64..1e3, n),
                proptest::collection::vec(-1e3f64..1e3, n),
            )
        })
    }

    proptest! {
        #[test]
        fn deviation_is_non_negative(data in proptest::collection::vec(-1e6f64..1e6, 2..100)) {
            prop_assert!(deviation(&data).unwrap() >= 0.0);
        }

        #[test]
        fn pearson_is_bounded((x, y) in paired(50)) {
            if let Some(r) = pearson(&x, &y) {
                prop_assert!(r.abs() <= 1.0 + 1e-12, "r = {}", r);
            }
        }

        #[test]
        fn pearson_is_symmetric((x, y) in paired(50)) {
            match (pearson(&x, &y), pearson(&y, &x)) {
                (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-12),
                (a, b) => prop_assert_eq!(a, b),
            }
        }
    }
}
