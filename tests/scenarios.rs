use anyhow::Result;
use approx::assert_relative_eq;
use nalgebra as na;
use scatter_geom::stats::chi_squared_inv;
use scatter_geom::{confidence_ellipse, convex_hull, ConfidenceEllipse, Error, SampleSeries};

fn points(coords: &[(f64, f64)]) -> Vec<na::Point2<f64>> {
    coords.iter().map(|&(x, y)| na::Point2::new(x, y)).collect()
}

#[test]
fn hull_drops_interior_point() {
    let input = points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.5, 0.5)]);
    let hull = convex_hull(&input);

    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&na::Point2::new(1.5, 0.5), 1e-9));
    assert!(!hull.iter().any(|p| *p == na::Point2::new(0.5, 0.5)));
    for p in &input {
        assert!(hull.contains(p, 1e-9));
    }
}

#[test]
fn hull_of_single_point() {
    let hull = convex_hull(&points(&[(2.0, 2.0)]));
    assert_eq!(hull.into_vec(), points(&[(2.0, 2.0)]));
}

#[test]
fn ellipse_of_perfectly_correlated_series() -> Result<()> {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
    let series = SampleSeries::new(x, y)?;
    let ellipse = ConfidenceEllipse::new().compute(&series);

    assert_relative_eq!(ellipse.center, na::Point2::new(3.0, 6.0), epsilon = 1e-12);
    assert!(ellipse.ry > ellipse.rx);
    assert_relative_eq!(ellipse.rx, 0.0, epsilon = 1e-6);
    assert_relative_eq!(
        ellipse.ry,
        (12.5 * chi_squared_inv(0.95, 2)).sqrt(),
        epsilon = 1e-6
    );

    Ok(())
}

#[test]
fn ellipse_of_constant_series_is_fixed_circle() -> Result<()> {
    let series = SampleSeries::new(vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0])?;
    let ellipse = confidence_ellipse(&series, 0.95);

    assert!(ellipse.is_computable());
    assert_relative_eq!(ellipse.rx, ellipse.ry);
    assert_relative_eq!(ellipse.rx, chi_squared_inv(0.95, 2).sqrt(), epsilon = 1e-9);

    Ok(())
}

#[test]
fn mismatched_series_is_rejected() {
    let result: Result<SampleSeries<f64>, Error> =
        SampleSeries::new(vec![1.0, 2.0], vec![1.0]).map_err(Error::from);
    assert!(matches!(result, Err(Error::Series(_))));
}
