//! Error definitions for preprocessing
use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error(transparent)]
    ClustervizError(#[from] clusterviz::error::Error),
}
