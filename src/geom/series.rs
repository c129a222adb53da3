use nalgebra as na;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("x and y must have the same number of samples, got x={x}, y={y}")]
    LengthMismatch { x: usize, y: usize },
}

/// Paired observations `(x[i], y[i])` stored as two parallel columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSeries<F: na::RealField + Copy> {
    x: Vec<F>,
    y: Vec<F>,
}

impl<F: na::RealField + Copy> SampleSeries<F> {
    /// Pairs `x[i]` with `y[i]`, failing if the columns differ in length.
    pub fn new(x: Vec<F>, y: Vec<F>) -> Result<Self, SeriesError> {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[F] {
        &self.x
    }

    pub fn y(&self) -> &[F] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl<F: na::RealField + Copy> FromIterator<na::Point2<F>> for SampleSeries<F> {
    fn from_iter<I: IntoIterator<Item = na::Point2<F>>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().map(|p| (p.x, p.y)).unzip();
        Self { x, y }
    }
}

impl<F: na::RealField + Copy> From<&[na::Point2<F>]> for SampleSeries<F> {
    fn from(points: &[na::Point2<F>]) -> Self {
        points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let result = SampleSeries::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);
        assert_eq!(result, Err(SeriesError::LengthMismatch { x: 3, y: 2 }));
    }

    #[test]
    fn test_from_points() {
        let points = [na::Point2::new(1.0, 2.0), na::Point2::new(3.0, 4.0)];
        let series = SampleSeries::from(&points[..]);
        assert_eq!(series.x(), &[1.0, 3.0]);
        assert_eq!(series.y(), &[2.0, 4.0]);
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_empty_series() {
        let series = SampleSeries::<f64>::new(vec![], vec![]).unwrap();
        assert!(series.is_empty());
    }
}
