//! Domain-level errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloorplanError {
    #[error("malformed token at line {line}: {token:?}")]
    MalformedToken { line: usize, token: String },

    #[error("input ended before the cut at line {line} received both children")]
    IncompleteTree { line: usize },

    #[error("empty input: no floorplan tokens found")]
    EmptyInput,

    #[error("subtree dimensions not resolved; run the dimension pass first")]
    UnresolvedDimensions,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FloorplanResult<T> = Result<T, FloorplanError>;
