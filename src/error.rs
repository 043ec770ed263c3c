//! Error type shared by generation, settings and clipboard handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no character class selected")]
    NoClassSelected,

    #[error("pool too small: {available} eligible characters for a {length}-character password")]
    PoolTooSmall { length: usize, available: usize },

    #[error("length {length} cannot hold one character from each of {classes} selected classes")]
    LengthBelowClassCount { length: usize, classes: usize },

    #[error("length {length} out of range ({min}-{max})")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Validation failures are guided retries, not faults.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NoClassSelected
                | Error::PoolTooSmall { .. }
                | Error::LengthBelowClassCount { .. }
                | Error::LengthOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
