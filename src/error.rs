use crate::geom::ellipse::ConfigError;
use crate::geom::series::SeriesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
