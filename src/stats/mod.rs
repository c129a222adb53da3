//! Statistical primitives behind the confidence ellipse:
//! - Sample mean, deviation and Pearson correlation of paired series
//! - Regularized incomplete gamma function and the chi-square quantile built on it

mod chi_squared;
mod descriptive;

pub use chi_squared::{chi_squared_inv, gamma_p, gamma_p_inv, ln_gamma};
pub use descriptive::{deviation, mean, pearson};
