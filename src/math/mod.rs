pub mod conic;
pub mod eigen;

pub use eigen::{symmetric_eigen2, SymmetricEigen2};
