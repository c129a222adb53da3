//! Helpers that turn an [crate::EllipseResult] into drawable geometry.
pub mod bezier;
pub mod sampling;

pub use bezier::{ellipse_path, CubicSegment, EllipsePath};
pub use sampling::sample_ellipse_points;
