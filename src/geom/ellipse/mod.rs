pub mod confidence;
pub mod planar;

pub use confidence::{confidence_ellipse, ConfidenceEllipse, ConfigError};
pub use planar::EllipseResult;
