//! Geometric descriptors for 2D scatter data: the convex hull of a point set and the
//! confidence ellipse of a bivariate Gaussian fit.
//!
//! Both computations are pure functions over in-memory slices. Degenerate input never
//! produces an error from the computation itself; it yields a bounded or NaN-valued
//! result instead, which the caller is expected to skip when drawing.
pub mod geom;
pub mod math;
pub mod stats;
pub mod utils;

mod error;

pub use error::Error;
pub use geom::ellipse::{confidence_ellipse, ConfidenceEllipse, EllipseResult};
pub use geom::hull::{convex_hull, ConvexHull};
pub use geom::series::SampleSeries;

/// Confidence level used when none is given.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
