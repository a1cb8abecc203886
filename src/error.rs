use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a dictionary load. Each maps to a stable result code
/// for callers on the other side of the C boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Dictionary source not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Dictionary source could not be parsed: {0}")]
    ParseFailure(String),

    #[error("Dictionary source contained no valid entries")]
    Empty,
}

impl LoadError {
    pub const CODE_NOT_FOUND: i32 = -1;
    pub const CODE_PARSE_FAILURE: i32 = -2;
    pub const CODE_EMPTY: i32 = 0;
    /// Null, empty or non UTF-8 argument at the boundary. Never produced by the loader itself.
    pub const CODE_EMPTY_INPUT: i32 = -3;

    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound(_) => Self::CODE_NOT_FOUND,
            Self::ParseFailure(_) => Self::CODE_PARSE_FAILURE,
            Self::Empty => Self::CODE_EMPTY,
        }
    }
}

#[derive(Error, Debug)]
pub enum SwipeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type SwResult<T> = Result<T, SwipeError>;
