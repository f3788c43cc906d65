//! Error types for Velvet Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Candidate name is empty")]
    EmptyName,

    #[error("Every descriptor is already taken")]
    NoDescriptorsLeft,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
