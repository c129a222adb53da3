pub mod ellipse;
pub mod hull;
pub mod series;
