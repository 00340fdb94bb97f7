//! Errors of a report run.

use crate::model::XrefId;
use crate::parser::ParsingError;
use thiserror::Error;

/// Fatal errors aborting a report run.
///
/// Unresolved links, depth truncation and cyclic ancestry are recovered
/// locally during traversal and never surface here.
#[derive(Debug, Error)]
pub enum SosaError {
    #[error("root {0} is not a person of the record store")]
    MissingRoot(XrefId),

    #[error("record store contains no identified records")]
    EmptyRecordStore,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not read record store: {0}")]
    Parsing(#[from] ParsingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SosaError>;
