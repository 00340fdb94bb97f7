//! Error types for the GEDCOM reader.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading a record store.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while reading GEDCOM data.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Line does not start with a level number")]
    MissingLevel,
    #[error("Invalid level - {0}")]
    InvalidLevel(String),
    #[error("Invalid line - {0}")]
    InvalidLine(String),
    #[error("Continuation line without a preceding record")]
    OrphanContinuation,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line and the offending text).
#[derive(Error, Debug)]
#[error("{kind} at line {line}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: usize,
    context: String,
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context: {context}")
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            line: parser.line(),
            context: parser.line_context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for MissingLevel
    pub fn missing_level<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::MissingLevel, parser)
    }

    /// Convenience constructor for InvalidLevel
    pub fn invalid_level<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidLevel(msg), parser)
    }

    /// Convenience constructor for InvalidLine
    pub fn invalid_line<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidLine(msg), parser)
    }

    /// Convenience constructor for OrphanContinuation
    pub fn orphan_continuation<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::OrphanContinuation, parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based line where the error occurred (0 if unknown)
    pub fn line(&self) -> usize {
        self.line
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            line: 0,
            context: String::new(),
        }
    }
}
