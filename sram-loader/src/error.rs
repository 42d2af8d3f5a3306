//! Loader errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Invalid token at byte {offset}: {text:?}")]
    InvalidToken { offset: usize, text: String },

    #[error("Incomplete instruction {index}: expected 3 values, found {found}")]
    IncompleteInstruction { index: usize, found: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
