//! Structs and logic to read GEDCOM records.
//!
//! This module provides the [GedcomReader], which turns GEDCOM lines into
//! nested [GedcomRecord]s, one top-level record at a time.

use crate::gedcom::defs::{CONC, CONT};
use crate::model::person::XrefId;
use crate::model::record::GedcomRecord;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;

/// A single GEDCOM line: `LEVEL [@XREF@] TAG [VALUE]`.
#[derive(Debug)]
struct Line {
    level: usize,
    xref: Option<XrefId>,
    tag: String,
    value: Option<String>,
}

impl Line {
    fn into_record(self) -> GedcomRecord {
        GedcomRecord::new(self.level, self.xref, self.tag, self.value)
    }

    fn is_continuation(&self) -> bool {
        self.tag == CONC || self.tag == CONT
    }
}

// =#========================================================================#=
// GEDCOM READER
// =#========================================================================#=
/// Reader for GEDCOM data, yielding top-level records with their nested lines.
///
/// The reader owns its [ByteParser] and reads lazily: each call to
/// [next_record](Self::next_record) parses exactly one top-level record.
/// It also implements [Iterator], or all records can be read at once with
/// [parse_all](Self::parse_all).
///
/// # Format
/// * Each line is `LEVEL [@XREF@] TAG [VALUE]`, separated by `\n`, `\r\n` or `\r`
/// * A line of level `k + 1` is nested into the preceding line of level `k`
/// * `CONC` and `CONT` lines extend the value of their parent line
///   (`CONT` starting a new line of text)
/// * Blank lines and a leading byte order mark are skipped
///
/// # Example
/// ```
/// use sosatree::gedcom::GedcomReader;
/// use sosatree::model::RawRecord;
/// use sosatree::parser::ByteParser;
///
/// let input = "0 @I1@ INDI\n1 NAME Ada /Byron/\n1 BIRT\n2 DATE 10 DEC 1815\n0 TRLR\n";
/// let mut reader = GedcomReader::new(ByteParser::for_str(input));
///
/// let ada = reader.next_record().unwrap().unwrap();
/// assert_eq!(ada.tag(), "INDI");
/// assert_eq!(ada.sub_records().len(), 2);
///
/// let trailer = reader.next_record().unwrap().unwrap();
/// assert_eq!(trailer.tag(), "TRLR");
/// assert!(reader.next_record().unwrap().is_none());
/// ```
pub struct GedcomReader<S: ByteSource> {
    parser: ByteParser<S>,
    /// Level-0 line already read that starts the next record
    pending: Option<Line>,
    started: bool,
}

impl<S: ByteSource> GedcomReader<S> {
    /// Creates a new reader on top of the given byte parser.
    pub fn new(parser: ByteParser<S>) -> Self {
        GedcomReader {
            parser,
            pending: None,
            started: false,
        }
    }

    /// Reads all remaining top-level records.
    ///
    /// # Errors
    /// Returns the first [ParsingError] encountered.
    pub fn parse_all(mut self) -> Result<Vec<GedcomRecord>, ParsingError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Reads the next top-level record, or `None` at the end of the data.
    ///
    /// # Errors
    /// Returns a [ParsingError] if a line has no level or no tag, if the first
    /// line of a record is not at level 0, if the level increases by more than
    /// one, or if a continuation line has no line to continue.
    pub fn next_record(&mut self) -> Result<Option<GedcomRecord>, ParsingError> {
        if !self.started {
            self.parser.skip_bom();
            self.started = true;
        }

        let head = match self.pending.take() {
            Some(line) => line,
            None => match self.parse_line()? {
                Some(line) => {
                    self.check_record_start(&line)?;
                    self.parser.consume_line_break();
                    line
                }
                None => return Ok(None),
            },
        };

        // Open records; the record at position `i` has level `i`
        let mut stack: Vec<GedcomRecord> = vec![head.into_record()];

        while let Some(line) = self.parse_line()? {
            if line.level == 0 {
                self.check_record_start(&line)?;
                self.parser.consume_line_break();
                self.pending = Some(line);
                break;
            }

            if line.level > stack.len() {
                return Err(ParsingError::invalid_level(
                    &self.parser,
                    format!("level {} follows level {}", line.level, stack.len() - 1),
                ));
            }
            close_records(&mut stack, line.level);

            if line.is_continuation() {
                // `close_records` leaves the parent line on top
                if let Some(parent) = stack.last_mut() {
                    parent.append_value(line.value.as_deref().unwrap_or(""), line.tag == CONT);
                }
            } else {
                stack.push(line.into_record());
            }
            self.parser.consume_line_break();
        }

        close_records(&mut stack, 1);
        Ok(stack.pop())
    }

    /// Ensures a level-0 line can start a record.
    fn check_record_start(&self, line: &Line) -> Result<(), ParsingError> {
        if line.level != 0 {
            return Err(ParsingError::invalid_level(
                &self.parser,
                format!("record starts at level {} instead of 0", line.level),
            ));
        }
        if line.is_continuation() {
            return Err(ParsingError::orphan_continuation(&self.parser));
        }
        Ok(())
    }

    /// Parses the next non-blank line, leaving the parser before its line break.
    fn parse_line(&mut self) -> Result<Option<Line>, ParsingError> {
        self.parser.skip_whitespace();
        if self.parser.is_eof() {
            return Ok(None);
        }

        let Some(level) = self.parser.parse_number() else {
            return Err(ParsingError::missing_level(&self.parser));
        };

        self.parser.skip_inline_whitespace();
        let xref = if self.parser.peek_is(b'@') {
            let token = self.parser.parse_token();
            if token.len() < 3 || !token.ends_with('@') {
                return Err(ParsingError::invalid_line(
                    &self.parser,
                    format!("malformed cross-reference identifier {token}"),
                ));
            }
            self.parser.skip_inline_whitespace();
            Some(XrefId::new(token))
        } else {
            None
        };

        let tag = self.parser.parse_token();
        if tag.is_empty() {
            return Err(ParsingError::invalid_line(&self.parser, "missing tag".to_string()));
        }

        // A single delimiter separates tag and value
        let value = if self.parser.consume_if(b' ') || self.parser.consume_if(b'\t') {
            Some(self.parser.parse_rest_of_line()).filter(|v| !v.is_empty())
        } else {
            None
        };

        Ok(Some(Line {
            level,
            xref,
            tag,
            value,
        }))
    }
}

/// Pops open records until only levels below `level` remain,
/// attaching each popped record to its parent.
fn close_records(stack: &mut Vec<GedcomRecord>, level: usize) {
    while stack.len() > level.max(1) {
        let Some(child) = stack.pop() else {
            break;
        };
        if let Some(parent) = stack.last_mut() {
            parent.push_child(child);
        }
    }
}

impl<S: ByteSource> Iterator for GedcomReader<S> {
    type Item = Result<GedcomRecord, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
