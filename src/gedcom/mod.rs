//! GEDCOM reader: the record source of this crate.
//!
//! This module provides the [GedcomReader] to read GEDCOM data into
//! [GedcomRecord]s, which the [RecordIndex](crate::model::RecordIndex)
//! consumes through the [RawRecord](crate::model::RawRecord) interface.
//! Only the line structure is interpreted here; the meaning of tags
//! (`INDI`, `FAM`, `FAMC`, ...) is left to the [model](crate::model).
//!
//! # Quick API
//! * [`parse_file`] - reads a file, returns all top-level records
//! * [`parse_str`] - reads a string, returns all top-level records
//!
//! # Full API
//! Wrap a [ByteParser](crate::parser::ByteParser) into a [GedcomReader] and
//! pull records with [`GedcomReader::next_record`] or iterate over it.

pub(crate) mod defs;
mod reader;

pub use self::reader::GedcomReader;

use crate::model::record::GedcomRecord;
use crate::parser::byte_parser::ByteParser;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Reads a GEDCOM file and returns all its top-level records in file order.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// Returns a [ParsingError] if the file cannot be read or is malformed.
///
/// # Example
/// ```ignore
/// use sosatree::gedcom::parse_file;
///
/// let records = parse_file("family.ged")?;
/// println!("Read {} records", records.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<GedcomRecord>, ParsingError> {
    let parser = ByteParser::for_file(path)?;
    GedcomReader::new(parser).parse_all()
}

/// Reads GEDCOM data from a string and returns all its top-level records.
///
/// # Errors
/// Returns a [ParsingError] if the data is malformed.
///
/// # Example
/// ```
/// use sosatree::gedcom::parse_str;
///
/// let records = parse_str("0 HEAD\n0 @I1@ INDI\n1 NAME Ada /Byron/\n0 TRLR\n").unwrap();
/// assert_eq!(records.len(), 3);
/// ```
pub fn parse_str<S: AsRef<str>>(gedcom: S) -> Result<Vec<GedcomRecord>, ParsingError> {
    GedcomReader::new(ByteParser::for_str(gedcom.as_ref())).parse_all()
}
