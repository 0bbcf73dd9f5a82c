use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hidden index: {0}")]
    InvalidIndex(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
