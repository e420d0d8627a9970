//! Error types for ClauseLens.
//!
//! The analysis core itself is total over all string inputs and never
//! produces an error; these variants cover the boundary layers (file
//! handling, upload transport).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
