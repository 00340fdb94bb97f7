//! Low-level parsing infrastructure.
//!
//! This module provides the line-aware [ByteParser] used by the
//! [GEDCOM reader](crate::gedcom), its byte sources, and error handling.

pub mod byte_parser;
pub mod byte_source;
pub mod parsing_error;

pub use byte_parser::{ByteParser, ConsumeMode};
pub use parsing_error::{ParsingError, ParsingErrorType};
